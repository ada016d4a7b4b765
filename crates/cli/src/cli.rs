// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::formatter::OutputFormat;

/// Render linter matches as text, quiet, parseable, or JSON output
#[derive(Parser)]
#[command(name = "lintfmt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Results documents to render (JSON, or YAML by extension); `-` or none reads stdin
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, env = "LINTFMT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "LINTFMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Write non-ASCII characters verbatim in JSON output
    #[arg(long)]
    pub no_ascii: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
