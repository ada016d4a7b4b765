//! Configuration parsing and validation.
//!
//! Handles lintfmt.toml parsing with version validation. Unknown keys are
//! reported on stderr and otherwise ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::color::ColorMode;
use crate::error::{Error, Result};
use crate::formatter::OutputFormat;

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    version: Option<i64>,

    #[serde(default)]
    output: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Output defaults.
    pub output: OutputConfig,
}

/// `[output]` section.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given.
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Color preference: auto, always, or never.
    #[serde(default)]
    pub color: ColorMode,

    /// Escape non-ASCII characters in JSON output (default: true).
    #[serde(default = "OutputConfig::default_ensure_ascii")]
    pub ensure_ascii: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: ColorMode::default(),
            ensure_ascii: Self::default_ensure_ascii(),
        }
    }
}

impl OutputConfig {
    fn default_ensure_ascii() -> bool {
        true
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "output"];

/// Known `[output]` keys in the config.
const KNOWN_OUTPUT_KEYS: &[&str] = &["format", "color", "ensure_ascii"];

/// Load config, warning on stderr about keys lintfmt does not know.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    parse_with_warnings(&read(path)?, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| config_error(e, path))?;
    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;
    check_version(version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let output: OutputConfig = match flexible.output {
        Some(toml::Value::Table(mut table)) => {
            let unknown: Vec<String> = table
                .keys()
                .filter(|k| !KNOWN_OUTPUT_KEYS.contains(&k.as_str()))
                .cloned()
                .collect();
            for key in unknown {
                warn_unknown_key(path, &format!("output.{}", key));
                table.remove(&key);
            }
            toml::Value::Table(table)
                .try_into()
                .map_err(|e| config_error(e, path))?
        }
        Some(_) => {
            return Err(Error::Config {
                message: "`output` must be a table".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
        None => OutputConfig::default(),
    };

    tracing::debug!(
        path = %path.display(),
        format = ?output.format,
        color = ?output.color,
        "loaded config"
    );

    Ok(Config { version, output })
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade lintfmt to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn config_error(err: impl std::fmt::Display, path: &Path) -> Error {
    Error::Config {
        message: err.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "lintfmt: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
