// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading matches from results documents.
//!
//! A results document is the structured (JSON) output of a previous run: an
//! array of records with `Rule`, `Location`, `Message`, and `Filename`.
//! `.yaml`/`.yml` files are read as YAML with the same shape. `Level` is
//! optional and ignored, since severity is derived from the rule id.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::formatter::JsonRecord;
use crate::model::Match;

/// Path argument meaning "read standard input".
pub const STDIN_ARG: &str = "-";

/// Encoding of a results document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Json,
    Yaml,
}

impl DocumentKind {
    /// Pick the encoding from a file extension. Anything but YAML is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentKind::Yaml
            }
            _ => DocumentKind::Json,
        }
    }
}

/// Parse a results document into matches, preserving document order.
///
/// `origin` only labels errors.
pub fn parse_document(content: &str, kind: DocumentKind, origin: &Path) -> Result<Vec<Match>> {
    let records: Vec<JsonRecord> = match kind {
        DocumentKind::Json => serde_json::from_str(content).map_err(|e| input_error(e, origin))?,
        DocumentKind::Yaml => serde_yaml::from_str(content).map_err(|e| input_error(e, origin))?,
    };
    Ok(records.into_iter().map(Match::from).collect())
}

/// Load matches from a file.
pub fn load(path: &Path) -> Result<Vec<Match>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let matches = parse_document(&content, DocumentKind::from_path(path), path)?;
    tracing::debug!(path = %path.display(), count = matches.len(), "loaded matches");
    Ok(matches)
}

/// Load matches from a JSON stream.
pub fn read_from(reader: &mut dyn Read) -> Result<Vec<Match>> {
    let origin = PathBuf::from("<stdin>");
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| Error::Io {
            path: origin.clone(),
            source: e,
        })?;
    let matches = parse_document(&content, DocumentKind::Json, &origin)?;
    tracing::debug!(count = matches.len(), "loaded matches from stdin");
    Ok(matches)
}

/// Load matches from every path in order, concatenated.
///
/// No paths, or a `-` path, reads `stdin`. Stdin is consumed at most once.
pub fn load_all(paths: &[PathBuf], stdin: &mut dyn Read) -> Result<Vec<Match>> {
    if paths.is_empty() {
        return read_from(stdin);
    }

    let mut matches = Vec::new();
    let mut stdin_used = false;
    for path in paths {
        if path.as_os_str() == STDIN_ARG {
            if stdin_used {
                return Err(Error::Argument(
                    "standard input (`-`) given more than once".to_string(),
                ));
            }
            stdin_used = true;
            matches.extend(read_from(stdin)?);
        } else {
            matches.extend(load(path)?);
        }
    }
    Ok(matches)
}

fn input_error(err: impl std::fmt::Display, origin: &Path) -> Error {
    Error::Input {
        path: origin.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
