// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parseable output for tools:
//! ```text
//! <file>:<line>:<col>:<end-line>:<end-col>:<rule-id>:<message>
//! ```
//!
//! Fields are not escaped; a message containing `:` stays as-is, so
//! consumers should split at most six times.

use super::MatchFormatter;
use crate::error::Result;
use crate::model::Match;

/// Colon-separated fixed-field formatter.
pub struct ParseableFormatter;

impl MatchFormatter for ParseableFormatter {
    fn format_match(&self, m: &Match) -> Result<String> {
        Ok(format!(
            "{}:{}:{}:{}:{}:{}:{}",
            m.filename.display(),
            m.line_number,
            m.column_number,
            m.line_number_end,
            m.column_number_end,
            m.rule.id,
            m.message
        ))
    }
}

#[cfg(test)]
#[path = "parseable_tests.rs"]
mod tests;
