//! Configuration validation.
//!
//! Reports non-fatal problems with a loaded configuration.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The configured catalog file does not exist.
    CatalogPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The configured catalog path exists but is not a regular file.
    CatalogPathNotFile {
        /// Offending path.
        path: String,
    },
    /// The directory the audit log would be written into does not exist.
    AuditDirectoryMissing {
        /// Audit log path.
        path: String,
    },
    /// `top_k = 0` would always yield an empty result.
    ZeroTopK,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogPathMissing { path } => write!(f, "catalog file does not exist: {path}"),
            Self::CatalogPathNotFile { path } => write!(f, "catalog path is not a file: {path}"),
            Self::AuditDirectoryMissing { path } => {
                write!(f, "audit log directory does not exist: {path}")
            }
            Self::ZeroTopK => write!(f, "top_k is 0, every recommendation will be empty"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.settings.top_k == 0 {
        warnings.push(ConfigWarning::ZeroTopK);
    }

    if let Some(path) = &config.catalog.path {
        if !path.exists() {
            warnings.push(ConfigWarning::CatalogPathMissing {
                path: path.display().to_string(),
            });
        } else if !path.is_file() {
            warnings.push(ConfigWarning::CatalogPathNotFile {
                path: path.display().to_string(),
            });
        }
    }

    if let Some(path) = &config.audit.path
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        warnings.push(ConfigWarning::AuditDirectoryMissing {
            path: path.display().to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn default_config_is_clean() {
        assert!(validate_config(&Config::default()).is_empty());
    }

    #[test]
    fn zero_top_k_warns() {
        let mut config = Config::default();
        config.settings.top_k = 0;
        assert_eq!(validate_config(&config), vec![ConfigWarning::ZeroTopK]);
    }

    #[test]
    fn missing_catalog_warns() {
        let dir = TestDir::new();
        let mut config = Config::default();
        config.catalog.path = Some(dir.path().join("nope.csv"));

        let warnings = validate_config(&config);
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::CatalogPathMissing { .. }]
        ));
    }

    #[test]
    fn catalog_directory_warns() {
        let dir = TestDir::new();
        let mut config = Config::default();
        config.catalog.path = Some(dir.create_dir("kits"));

        let warnings = validate_config(&config);
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::CatalogPathNotFile { .. }]
        ));
    }

    #[test]
    fn existing_catalog_is_clean() {
        let dir = TestDir::new();
        let mut config = Config::default();
        config.catalog.path = Some(dir.create_file("kits.csv"));
        config.audit.path = Some(dir.path().join("audit.jsonl"));
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn audit_in_missing_directory_warns() {
        let dir = TestDir::new();
        let mut config = Config::default();
        config.audit.path = Some(dir.path().join("logs/audit.jsonl"));
        let warnings = validate_config(&config);
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::AuditDirectoryMissing { .. }]
        ));
    }

    #[test]
    fn warning_display() {
        let w = ConfigWarning::CatalogPathMissing {
            path: "/x/kits.csv".into(),
        };
        assert_eq!(w.to_string(), "catalog file does not exist: /x/kits.csv");
    }
}
