// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! Emits an array with one object per match. Keys are sorted at every level
//! and indented by four spaces so output is byte-for-byte reproducible. The
//! same record shape is accepted back as input (see `input`).

use std::io::{self, Write};

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use super::MatchFormatter;
use crate::error::{Error, Result};
use crate::model::{Match, PathSegment, Rule, Severity};

/// Rule metadata in structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonRule {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub source: String,
}

/// Line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonPosition {
    pub column_number: usize,
    pub line_number: usize,
}

/// Start/end span plus optional document path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonLocation {
    pub start: JsonPosition,
    pub end: JsonPosition,
    /// Serialized as `null` when absent.
    #[serde(default)]
    pub path: Option<Vec<PathSegment>>,
}

/// One match in structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonRecord {
    pub rule: JsonRule,
    pub location: JsonLocation,
    /// Always written. On input any value is accepted and dropped, since the
    /// level is derived from the rule id.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "discard_level"
    )]
    pub level: Option<Severity>,
    pub message: String,
    pub filename: String,
}

fn discard_level<'de, D>(deserializer: D) -> std::result::Result<Option<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(None)
}

impl From<&Match> for JsonRecord {
    fn from(m: &Match) -> Self {
        Self {
            rule: JsonRule {
                id: m.rule.id.clone(),
                description: m.rule.description.clone(),
                short_description: m.rule.short_description.clone(),
                source: m.rule.source_url.clone(),
            },
            location: JsonLocation {
                start: JsonPosition {
                    column_number: m.column_number,
                    line_number: m.line_number,
                },
                end: JsonPosition {
                    column_number: m.column_number_end,
                    line_number: m.line_number_end,
                },
                path: m.path.clone(),
            },
            level: Some(m.severity()),
            message: m.message.clone(),
            filename: m.filename.display().to_string(),
        }
    }
}

impl From<JsonRecord> for Match {
    fn from(record: JsonRecord) -> Self {
        Self {
            rule: Rule {
                id: record.rule.id,
                description: record.rule.description,
                short_description: record.rule.short_description,
                source_url: record.rule.source,
            },
            filename: record.filename.into(),
            line_number: record.location.start.line_number,
            column_number: record.location.start.column_number,
            line_number_end: record.location.end.line_number,
            column_number_end: record.location.end.column_number,
            message: record.message,
            path: record.location.path,
        }
    }
}

/// JSON formatter for machine-readable output.
pub struct JsonFormatter {
    ensure_ascii: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    ///
    /// With `ensure_ascii`, every character outside printable ASCII is
    /// written as a `\uXXXX` escape.
    pub fn new(ensure_ascii: bool) -> Self {
        Self { ensure_ascii }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        // Round-trip through Value so object keys come out sorted.
        let value = serde_json::to_value(value)?;
        let mut buf = Vec::with_capacity(256);
        let formatter = IndentFormatter::new(self.ensure_ascii);
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        String::from_utf8(buf)
            .map_err(|e| Error::Internal(format!("json output is not UTF-8: {e}")))
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MatchFormatter for JsonFormatter {
    fn format_match(&self, m: &Match) -> Result<String> {
        self.render(&JsonRecord::from(m))
    }

    /// Always a document, `[]` when there are no matches.
    fn format(&self, matches: &[Match]) -> Result<Option<String>> {
        let records: Vec<JsonRecord> = matches.iter().map(JsonRecord::from).collect();
        self.render(&records).map(Some)
    }
}

/// Four-space pretty printer with optional ASCII escaping.
struct IndentFormatter {
    inner: PrettyFormatter<'static>,
    ensure_ascii: bool,
}

impl IndentFormatter {
    fn new(ensure_ascii: bool) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"    "),
            ensure_ascii,
        }
    }
}

impl Formatter for IndentFormatter {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !self.ensure_ascii {
            return writer.write_all(fragment.as_bytes());
        }
        write_ascii_escaped(writer, fragment)
    }
}

/// Write `fragment`, replacing non-printable-ASCII chars with `\uXXXX`
/// (surrogate pairs above the BMP). Quotes, backslashes, and control chars
/// never reach here; serde_json escapes those itself.
fn write_ascii_escaped<W>(writer: &mut W, fragment: &str) -> io::Result<()>
where
    W: ?Sized + io::Write,
{
    let mut start = 0;
    for (i, c) in fragment.char_indices() {
        if c.is_ascii() && c != '\x7f' {
            continue;
        }
        writer.write_all(fragment[start..i].as_bytes())?;
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units).iter() {
            write!(writer, "\\u{:04x}", unit)?;
        }
        start = i + c.len_utf8();
    }
    writer.write_all(fragment[start..].as_bytes())
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
