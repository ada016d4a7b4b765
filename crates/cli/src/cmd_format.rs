// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Format command implementation.

use std::io::Write;

use anyhow::Context;

use lintfmt::cli::Cli;
use lintfmt::color;
use lintfmt::config::{self, Config};
use lintfmt::discovery;
use lintfmt::error::ExitCode;
use lintfmt::formatter::{FormatOptions, format_matches};
use lintfmt::input;

/// Load matches from the given paths (or stdin) and print them.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("using config from {}", path.display());
            config::load_with_warnings(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    // Flag beats config beats default
    let format = cli.format.or(config.output.format).unwrap_or_default();
    let options = FormatOptions {
        color: color::resolve(cli.color, cli.no_color, config.output.color),
        ensure_ascii: !cli.no_ascii && config.output.ensure_ascii,
    };
    tracing::debug!(
        %format,
        color = ?options.color,
        ensure_ascii = options.ensure_ascii,
        "resolved output options"
    );

    let stdin = std::io::stdin();
    let matches = input::load_all(&cli.paths, &mut stdin.lock())?;
    tracing::debug!(count = matches.len(), "formatting matches");

    if let Some(output) = format_matches(format, &matches, &options)? {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", output).context("failed to write output")?;
        handle.flush().context("failed to write output")?;
    }

    Ok(ExitCode::Success)
}
