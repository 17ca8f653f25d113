//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use kitmatch_catalog::{
    CatalogError, CatalogProvider, CatalogRepository, CsvCatalog, JsonlAuditLog, SeedCatalog,
    Snapshot,
};
use kitmatch_config::Config;
use kitmatch_engine::{EquipmentKit, Recommender};
use tracing::debug;

use crate::cli::args::CatalogArgs;

/// Where the catalog for this invocation comes from.
pub enum CatalogSource {
    /// A CSV file.
    Csv(CsvCatalog),
    /// The compiled-in demonstration catalog.
    Seed(SeedCatalog),
}

impl CatalogProvider for CatalogSource {
    fn list_items(&self) -> Result<Vec<EquipmentKit>, CatalogError> {
        match self {
            Self::Csv(csv) => csv.list_items(),
            Self::Seed(seed) => seed.list_items(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Csv(csv) => csv.describe(),
            Self::Seed(seed) => seed.describe(),
        }
    }
}

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Picks the catalog source: the command-line override, then the config, then the seed.
    pub fn catalog_source(&self, args: &CatalogArgs) -> CatalogSource {
        let path = args
            .catalog
            .as_ref()
            .map(|p| self.cwd.join(p))
            .or_else(|| self.config.catalog.path.clone());
        match path {
            Some(path) => CatalogSource::Csv(CsvCatalog::new(path)),
            None => CatalogSource::Seed(SeedCatalog),
        }
    }

    /// Loads a catalog snapshot, reporting failures consistently.
    pub fn catalog(&self, args: &CatalogArgs) -> Result<Snapshot, ExitCode> {
        let repository = CatalogRepository::new(self.catalog_source(args));
        repository.snapshot().map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Builds the recommender, attaching the audit log when one is configured.
    pub fn recommender(&self) -> Result<Recommender, ExitCode> {
        let recommender = Recommender::from_config(&self.config).map_err(|e| {
            eprintln!("error: invalid configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(match &self.config.audit.path {
            Some(path) => {
                debug!(path = %path.display(), "audit log enabled");
                recommender.with_audit_sink(Box::new(JsonlAuditLog::new(path)))
            }
            None => recommender,
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
