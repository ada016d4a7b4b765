// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lintfmt CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use lintfmt::cli::Cli;
use lintfmt::error::ExitCode;

mod cmd_format;

fn init_logging() {
    let filter = EnvFilter::try_from_env("LINTFMT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("lintfmt: {}", e);
            match e.downcast_ref::<lintfmt::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_format::run(&cli)
}
