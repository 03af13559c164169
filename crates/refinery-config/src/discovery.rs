//! Locating `.refinery.toml` files.
//!
//! Every ancestor of the working directory is checked, nearest first. A file with
//! `root = true` ends the search and suppresses the global file in the home directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".refinery.toml";

/// Lists the config files that apply to `cwd`, highest precedence first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for candidate in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !candidate.is_file() {
            continue;
        }
        let stops = is_root_config(&candidate);
        found.push(candidate);
        if stops {
            return found;
        }
    }

    if let Some(global) = global_config_path().filter(|p| p.is_file() && !found.contains(p)) {
        found.push(global);
    }
    found
}

/// `~/.refinery.toml`, if a home directory is known.
fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// True if `path` is the global config file in the home directory.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| global == path)
}
