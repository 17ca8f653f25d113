//! Integration tests for kitmatch-config.
//!
//! Exercises the full loading pipeline: discovery -> parse -> merge -> validate.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use kitmatch_config::{CONFIG_FILENAME, Config, ConfigError, ConfigWarning, StrategyKind};

/// Temporary directory with helpers for writing config files.
struct TestEnv {
    /// Owned temp dir.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn write_config(&self, rel_dir: &str, content: &str) -> PathBuf {
        self.create_file(&format!("{rel_dir}/{CONFIG_FILENAME}"), content)
    }
}

#[test]
fn load_without_files_gives_defaults() {
    let env = TestEnv::new();
    let config = Config::load_from_files(&[]).unwrap();
    assert_eq!(config.settings.top_k, 3);
    assert!(config.catalog.path.is_none());
    assert!(env.path().exists());
}

#[test]
fn nested_configs_merge_by_precedence() {
    let env = TestEnv::new();
    env.write_config(
        "shop",
        "root = true\n[settings]\ntop_k = 5\nstrategy = \"corpus\"\n[catalog]\npath = \"kits.csv\"\n",
    );
    env.write_config("shop/branch", "[settings]\ntop_k = 8\n");
    env.create_file("shop/kits.csv", "name\nSony ZV-1\n");
    let cwd = env.create_dir("shop/branch/today");

    let config = Config::load(&cwd).unwrap();
    assert_eq!(config.settings.top_k, 8);
    assert_eq!(config.settings.strategy, StrategyKind::Corpus);
    assert_eq!(
        config.catalog.path,
        Some(env.path().join("shop").join("kits.csv"))
    );
    assert!(config.validate().is_empty());
}

#[test]
fn broken_config_reports_path() {
    let env = TestEnv::new();
    let path = env.write_config("shop", "root = true\n[settings\n");

    let err = Config::load(&env.path().join("shop")).unwrap_err();
    match err {
        ConfigError::ParseToml { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_catalog_is_a_warning_not_an_error() {
    let env = TestEnv::new();
    env.write_config("shop", "root = true\n[catalog]\npath = \"missing.csv\"\n");

    let config = Config::load(&env.path().join("shop")).unwrap();
    let warnings = config.validate();
    assert!(matches!(
        warnings.as_slice(),
        [ConfigWarning::CatalogPathMissing { .. }]
    ));
}
