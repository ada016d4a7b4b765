//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the lintfmt binary against fixtures.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Environment variables that change lintfmt's behavior.
const LINTFMT_ENV: &[&str] = &[
    "LINTFMT_FORMAT",
    "LINTFMT_CONFIG",
    "LINTFMT_LOG",
    "NO_COLOR",
    "COLOR",
];

/// Returns a Command configured to run the lintfmt binary
pub fn lintfmt_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lintfmt"));
    for var in LINTFMT_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a builder for one lintfmt run
pub fn lintfmt() -> RunBuilder {
    RunBuilder::default()
}

/// Fluent builder for a lintfmt invocation.
#[derive(Default)]
pub struct RunBuilder {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

#[allow(dead_code)]
impl RunBuilder {
    /// Select the output format
    pub fn format(self, name: &str) -> Self {
        self.args(&["--format", name])
    }

    /// Add a results document path
    pub fn input(mut self, path: impl AsRef<Path>) -> Self {
        self.args.push(path.as_ref().display().to_string());
        self
    }

    /// Add raw arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Run in the given directory (defaults to a fresh temp dir)
    pub fn pwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feed a document on standard input
    pub fn stdin(mut self, content: impl Into<String>) -> Self {
        self.stdin = Some(content.into());
        self
    }

    /// Run and assert exit code 0
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and assert the given exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let scratch = tempfile::tempdir().unwrap();
        let mut cmd = lintfmt_cmd();
        cmd.args(&self.args);
        cmd.current_dir(self.dir.as_deref().unwrap_or(scratch.path()));
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());

        let output = cmd.output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Output of a run, for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Captured stdout, lossily decoded
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Captured stderr, lossily decoded
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Exact stdout comparison with a diff on failure
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// `&str` means "contains"; any `Predicate<str>` also works
    pub fn stdout_has<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        let stdout = self.stdout();
        check("stdout", &stdout, predicate.into_predicate(), true);
        self
    }

    pub fn stdout_lacks<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        let stdout = self.stdout();
        check("stdout", &stdout, predicate.into_predicate(), false);
        self
    }

    pub fn stderr_has<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        let stderr = self.stderr();
        check("stderr", &stderr, predicate.into_predicate(), true);
        self
    }

    pub fn stderr_lacks<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        let stderr = self.stderr();
        check("stderr", &stderr, predicate.into_predicate(), false);
        self
    }
}

fn check<P: Predicate<str>>(stream: &str, text: &str, predicate: P, expected: bool) {
    let verb = if expected { "should" } else { "should NOT" };
    assert_eq!(
        predicate.eval(text),
        expected,
        "{stream} {verb} match {predicate}:\n{text}"
    );
}

/// Get path to a results fixture
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join("results")
        .join(name)
}

/// Temporary project directory with helper methods.
///
/// ```ignore
/// let temp = Project::with_config("[output]\nformat = \"quiet\"");
/// temp.file("out/results.json", "[]");
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Empty project with no lintfmt.toml
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Project with lintfmt.toml holding `version = 1` plus `body`
    pub fn with_config(body: &str) -> Self {
        let project = Self::empty();
        project.config(body);
        project
    }

    /// Write lintfmt.toml with `version = 1` prefixed
    pub fn config(&self, body: &str) {
        self.file("lintfmt.toml", &format!("version = 1\n{body}"));
    }

    /// Write a file, creating parent directories
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Project root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
