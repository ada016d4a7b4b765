//! Behavioral specs for reading results documents.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > With no paths, the document is read from stdin
#[test]
fn reads_stdin_without_paths() {
    let document = std::fs::read_to_string(fixture("sample.json")).unwrap();
    lintfmt()
        .format("quiet")
        .stdin(document)
        .passes()
        .stdout_has("W2001 template.yaml:12\n");
}

/// > `-` reads stdin in argument order
#[test]
fn dash_reads_stdin_in_order() {
    let stdin = r#"[{"Filename": "a.yaml", "Location": {"Start": {"LineNumber": 1, "ColumnNumber": 1}, "End": {"LineNumber": 1, "ColumnNumber": 1}}, "Message": "m", "Rule": {"Id": "E0001"}}]"#;
    lintfmt()
        .format("quiet")
        .args(&["-"])
        .input(fixture("sample.json"))
        .stdin(stdin)
        .passes()
        .stdout_eq(
            "E0001 a.yaml:1\n\
             E3001 template.yaml:4\n\
             W2001 template.yaml:12\n\
             I3011 nested/stack.json:30\n",
        );
}

/// > Documents are concatenated in argument order
#[test]
fn multiple_documents_concatenate() {
    let run = lintfmt()
        .format("quiet")
        .input(fixture("sample.yaml"))
        .input(fixture("sample.json"))
        .passes();
    assert_eq!(run.stdout().lines().count(), 6);
}

/// > `-` given twice is an argument error
#[test]
fn dash_twice_fails() {
    lintfmt()
        .args(&["-", "-"])
        .stdin("[]")
        .exits(2)
        .stderr_has("more than once");
}

/// > A document that is not an array of records exits 4
#[test]
fn invalid_document_exits_4() {
    lintfmt()
        .input(fixture("invalid.json"))
        .exits(4)
        .stderr_has("invalid input");
}

#[test]
fn invalid_stdin_exits_4() {
    lintfmt()
        .stdin("not json")
        .exits(4)
        .stderr_has("<stdin>");
}

/// > A missing input file is an I/O error
#[test]
fn missing_file_exits_3() {
    lintfmt()
        .input("does-not-exist.json")
        .exits(3)
        .stderr_has("does-not-exist.json");
}

/// > Level on input is not validated; it is re-derived from the rule id
#[test]
fn input_level_is_rederived() {
    let stdin = r#"[{"Filename": "a.yaml", "Level": "Fatal", "Location": {"Start": {"LineNumber": 1, "ColumnNumber": 1}, "End": {"LineNumber": 1, "ColumnNumber": 1}}, "Message": "m", "Rule": {"Id": "I0001"}}]"#;
    lintfmt()
        .format("json")
        .stdin(stdin)
        .passes()
        .stdout_has(r#""Level": "Informational""#);
}
