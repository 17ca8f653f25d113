//! Configuration file discovery.
//!
//! Walks up from a starting directory collecting `.kitmatch.toml` files, then appends the
//! global `~/.kitmatch.toml` when present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".kitmatch.toml";

/// Discovers all configuration files relevant to `cwd`.
///
/// Paths are returned in precedence order: closest to `cwd` first, global last. Traversal
/// stops at a file declaring `root = true`, in which case the global file is not consulted.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let is_root = is_root_config(&candidate);
        configs.push(candidate);
        if is_root {
            found_root = true;
            break;
        }
    }

    if !found_root
        && let Some(global) = global_config_path()
        && global.is_file()
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    configs
}

/// Returns the path of the global configuration file (`~/.kitmatch.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks whether a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
