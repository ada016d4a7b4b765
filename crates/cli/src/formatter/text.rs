// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One paragraph per match:
//! ```text
//! <rule-id> <message>
//! <file>:<line>:<column>
//! ```
//!
//! Paragraphs end in a newline and are joined by another, leaving a blank
//! line between matches.

use std::io::Write;

use termcolor::{Buffer, ColorChoice, WriteColor};

use super::MatchFormatter;
use crate::color::scheme;
use crate::error::{Error, Result};
use crate::model::Match;

/// Human-readable formatter with optional color.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter.
    ///
    /// Any choice other than `ColorChoice::Never` emits ANSI styling; the
    /// caller is expected to have resolved `Auto` against the terminal.
    pub fn new(color_choice: ColorChoice) -> Self {
        Self {
            color: !matches!(color_choice, ColorChoice::Never),
        }
    }

    /// Text formatter without color.
    pub fn plain() -> Self {
        Self::new(ColorChoice::Never)
    }

    fn write_match(&self, buf: &mut Buffer, m: &Match) -> std::io::Result<()> {
        buf.set_color(&scheme::rule(m.severity()))?;
        write!(buf, "{}", m.rule.id)?;
        buf.reset()?;
        writeln!(buf, " {}", m.message)?;

        buf.set_color(&scheme::path())?;
        write!(buf, "{}", m.filename.display())?;
        buf.reset()?;
        write!(buf, ":")?;
        buf.set_color(&scheme::line_number())?;
        write!(buf, "{}", m.line_number)?;
        buf.reset()?;
        writeln!(buf, ":{}", m.column_number)?;
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::plain()
    }
}

impl MatchFormatter for TextFormatter {
    fn format_match(&self, m: &Match) -> Result<String> {
        let mut buf = if self.color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        self.write_match(&mut buf, m)?;
        String::from_utf8(buf.into_inner())
            .map_err(|e| Error::Internal(format!("text output is not UTF-8: {e}")))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
