//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for lintfmt.toml.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "lintfmt.toml";

/// Find lintfmt.toml in `start_dir` or its ancestors.
///
/// The directory holding `.git` is the last one searched.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::trace!(path = %candidate.display(), "discovered config");
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Pick the config file to load.
///
/// An explicit path (`-C` or `LINTFMT_CONFIG`) must exist. Without one,
/// discovery runs from `cwd`; `None` means built-in defaults apply.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd));
    };
    if !path.exists() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
