// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match and rule types consumed by the formatters.
//!
//! Matches are produced elsewhere (the linter proper). Formatters only read
//! them, so everything here is plain data with a few builder helpers.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The rule a match was raised by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rule {
    /// Rule identifier (e.g., "E3001"). The first letter encodes severity.
    pub id: String,
    /// Long description of what the rule checks.
    pub description: String,
    /// One-line summary of the rule.
    pub short_description: String,
    /// Documentation link for the rule.
    pub source_url: String,
}

impl Rule {
    /// Create a rule with an id and leave the metadata empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Attach descriptions.
    pub fn with_description(
        mut self,
        short_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.short_description = short_description.into();
        self.description = description.into();
        self
    }

    /// Attach a documentation link.
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Severity class encoded in the rule id.
    pub fn severity(&self) -> Severity {
        Severity::from_rule_id(&self.id)
    }
}

/// Severity class of a rule, derived from its id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Informational,
}

impl Severity {
    /// `W...` is a warning, `I...` is informational, anything else
    /// (including an empty id) is an error.
    pub fn from_rule_id(id: &str) -> Self {
        match id.chars().next() {
            Some('W') => Severity::Warning,
            Some('I') => Severity::Informational,
            _ => Severity::Error,
        }
    }

    /// Name as it appears in structured output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Informational => "Informational",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step into the template document: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Rule that produced this finding.
    pub rule: Rule,
    /// Template the finding is in.
    pub filename: PathBuf,
    /// 1-based start line.
    pub line_number: usize,
    /// 1-based start column.
    pub column_number: usize,
    /// 1-based end line.
    pub line_number_end: usize,
    /// 1-based end column.
    pub column_number_end: usize,
    /// Human-readable description of the problem.
    pub message: String,
    /// Location inside the parsed document, when known.
    pub path: Option<Vec<PathSegment>>,
}

impl Match {
    /// Create a match at line 1, column 1 with no document path.
    pub fn new(rule: Rule, filename: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            rule,
            filename: filename.into(),
            line_number: 1,
            column_number: 1,
            line_number_end: 1,
            column_number_end: 1,
            message: message.into(),
            path: None,
        }
    }

    /// Set the start position. The end position moves with it.
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line_number = line;
        self.column_number = column;
        self.line_number_end = line;
        self.column_number_end = column;
        self
    }

    /// Set the end position.
    pub fn ending_at(mut self, line: usize, column: usize) -> Self {
        self.line_number_end = line;
        self.column_number_end = column;
        self
    }

    /// Attach the document path.
    pub fn with_path<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        self.path = Some(segments.into_iter().map(Into::into).collect());
        self
    }

    /// Severity derived from the rule id.
    pub fn severity(&self) -> Severity {
        self.rule.severity()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
