//! Path resolution for paths named in config files.
//!
//! Relative paths are anchored at the directory of the config file that defines them, and a
//! leading `~` is expanded to the home directory. Paths are not required to exist: the audit
//! log is created on first write and a missing catalog is reported by validation instead.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a config path to an absolute path.
///
/// - `~` and `~/rest` expand to the home directory
/// - relative paths are joined onto `config_dir`
/// - absolute paths are returned unchanged
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_joins_config_dir() {
        let resolved = resolve_path("data/kits.csv", Path::new("/srv/shop")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/shop/data/kits.csv"));
    }

    #[test]
    fn dot_relative_path_joins_config_dir() {
        let resolved = resolve_path("./kits.csv", Path::new("/srv/shop")).unwrap();
        assert_eq!(resolved, Path::new("/srv/shop").join("./kits.csv"));
    }

    #[test]
    fn absolute_path_is_unchanged() {
        let resolved = resolve_path("/var/lib/kits.csv", Path::new("/srv/shop")).unwrap();
        assert_eq!(resolved, PathBuf::from("/var/lib/kits.csv"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(dirs) = BaseDirs::new() else {
            return;
        };
        let resolved = resolve_path("~/kits.csv", Path::new("/srv/shop")).unwrap();
        assert_eq!(resolved, dirs.home_dir().join("kits.csv"));
    }
}
