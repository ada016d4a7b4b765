// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quiet output: `<rule-id> <file>:<line>`, one line per match.

use super::MatchFormatter;
use crate::error::Result;
use crate::model::Match;

/// One-line-per-match summary formatter.
pub struct QuietFormatter;

impl MatchFormatter for QuietFormatter {
    fn format_match(&self, m: &Match) -> Result<String> {
        Ok(format!(
            "{} {}:{}",
            m.rule.id,
            m.filename.display(),
            m.line_number
        ))
    }
}

#[cfg(test)]
#[path = "quiet_tests.rs"]
mod tests;
