pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod formatter;
pub mod input;
pub mod model;

pub use cli::Cli;
pub use color::ColorMode;
pub use error::{Error, ExitCode, Result};
pub use formatter::{
    FormatOptions, MatchFormatter, OutputFormat, create_formatter, format_matches,
    format_matches_to,
};
pub use model::{Match, PathSegment, Rule, Severity};
