// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color resolution and the text output palette.
//!
//! The first rule that applies wins:
//! 1. `--no-color`, then `--color`
//! 2. `color = "always"` or `"never"` in lintfmt.toml
//! 3. `NO_COLOR` disables, `COLOR` forces
//! 4. piped stdout, or an agent/CI environment, disables
//! 5. otherwise `ColorChoice::Auto`

use std::io::IsTerminal;

use serde::Deserialize;
use termcolor::ColorChoice;

/// Color preference from config.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve color choice from `--color`/`--no-color`, config, and environment.
pub fn resolve(force: bool, disable: bool, mode: ColorMode) -> ColorChoice {
    match (disable, force, mode) {
        (true, _, _) => ColorChoice::Never,
        (false, true, _) => ColorChoice::Always,
        (false, false, ColorMode::Always) => ColorChoice::Always,
        (false, false, ColorMode::Never) => ColorChoice::Never,
        (false, false, ColorMode::Auto) => resolve_color(),
    }
}

/// Variables set by coding agents and CI runners, whose output is read
/// back as plain text.
const AGENT_ENV_VARS: &[&str] = &["CLAUDE_CODE", "CODEX", "CURSOR", "CI"];

/// Resolve color choice from the environment alone.
///
/// `NO_COLOR` with any value, even empty, disables color
/// (<https://no-color.org/>). `COLOR` forces it.
pub fn resolve_color() -> ColorChoice {
    let env_set = |name: &str| std::env::var_os(name).is_some();

    if env_set("NO_COLOR") {
        ColorChoice::Never
    } else if env_set("COLOR") {
        ColorChoice::Always
    } else if !std::io::stdout().is_terminal() || AGENT_ENV_VARS.iter().any(|v| env_set(v)) {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

/// Palette for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::model::Severity;

    fn fg(color: Color) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));
        spec
    }

    /// Bold rule id: red errors, yellow warnings, cyan informational.
    pub fn rule(severity: Severity) -> ColorSpec {
        let mut spec = fg(match severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Informational => Color::Cyan,
        });
        spec.set_bold(true);
        spec
    }

    pub fn path() -> ColorSpec {
        fg(Color::Cyan)
    }

    pub fn line_number() -> ColorSpec {
        fg(Color::Yellow)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
