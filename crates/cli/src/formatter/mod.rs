// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match formatters.
//!
//! Renders a sequence of matches as text, quiet, parseable, or JSON output.
//! Formatters are pure: they return strings (or write to a caller-supplied
//! writer) and never print.

mod json;
mod parseable;
mod quiet;
mod text;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use termcolor::ColorChoice;

use crate::error::{Error, Result};
use crate::model::Match;

pub use json::{JsonFormatter, JsonLocation, JsonPosition, JsonRecord, JsonRule};
pub use parseable::ParseableFormatter;
pub use quiet::QuietFormatter;
pub use text::TextFormatter;

/// Trait for rendering matches into an output encoding.
pub trait MatchFormatter: Send + Sync {
    /// Render a single match.
    fn format_match(&self, m: &Match) -> Result<String>;

    /// Render all matches.
    ///
    /// Returns `None` when there is nothing to print. Line-based formats
    /// join per-match output with newlines.
    fn format(&self, matches: &[Match]) -> Result<Option<String>> {
        if matches.is_empty() {
            return Ok(None);
        }
        let blocks = matches
            .iter()
            .map(|m| self.format_match(m))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(blocks.join("\n")))
    }

    /// Write rendered matches to a writer.
    ///
    /// Writes exactly the bytes `format` would return, and nothing when it
    /// would return `None`.
    fn format_to(&self, writer: &mut dyn std::io::Write, matches: &[Match]) -> Result<()> {
        if let Some(output) = self.format(matches)? {
            writer.write_all(output.as_bytes())?;
        }
        Ok(())
    }
}

/// Output encoding selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rule, message, and location per paragraph
    #[default]
    #[value(alias = "default")]
    #[serde(alias = "default")]
    Text,
    /// Rule and location, one line per match
    Quiet,
    /// Colon-separated fields for tools
    Parseable,
    /// Sorted-key JSON array
    Json,
}

impl OutputFormat {
    /// Name used on the command line and in config.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Quiet => "quiet",
            OutputFormat::Parseable => "parseable",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "default" => Ok(OutputFormat::Text),
            "quiet" => Ok(OutputFormat::Quiet),
            "parseable" => Ok(OutputFormat::Parseable),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Argument(format!(
                "unknown output format `{other}` (expected text, quiet, parseable, or json)"
            ))),
        }
    }
}

/// Formatter options shared across encodings.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Color for text output. Other encodings ignore it.
    pub color: ColorChoice,
    /// Escape non-ASCII characters in JSON output.
    pub ensure_ascii: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            color: ColorChoice::Never,
            ensure_ascii: true,
        }
    }
}

/// Create formatter based on output format.
pub fn create_formatter(format: OutputFormat, options: &FormatOptions) -> Box<dyn MatchFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(options.color)),
        OutputFormat::Quiet => Box::new(QuietFormatter),
        OutputFormat::Parseable => Box::new(ParseableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(options.ensure_ascii)),
    }
}

/// Format matches, returning the output string.
///
/// `None` means there is nothing to print.
pub fn format_matches(
    format: OutputFormat,
    matches: &[Match],
    options: &FormatOptions,
) -> Result<Option<String>> {
    create_formatter(format, options).format(matches)
}

/// Format matches directly to a writer.
pub fn format_matches_to(
    writer: &mut dyn std::io::Write,
    format: OutputFormat,
    matches: &[Match],
    options: &FormatOptions,
) -> Result<()> {
    create_formatter(format, options).format_to(writer, matches)
}


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
