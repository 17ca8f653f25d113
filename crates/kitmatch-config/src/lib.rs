//! Configuration system for kitmatch.
//!
//! kitmatch reads TOML files named `.kitmatch.toml`. Files are collected by walking up from the
//! working directory, and `~/.kitmatch.toml` is appended as the global file with the lowest
//! precedence. An absent configuration reproduces the built-in scoring constants exactly.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawAuditSettings, RawCatalogSettings, RawConfig, RawCorpusWeights, RawSettings,
    RawTagWeights, parse_config_file, parse_config_str,
};
pub use resolve::resolve_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration.
///
/// This is the fully resolved view after merging every discovered `.kitmatch.toml` according
/// to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Catalog source settings.
    pub catalog: CatalogSettings,
    /// Recommendation audit log settings.
    pub audit: AuditSettings,
    /// Weights of the corpus-similarity strategy.
    pub corpus: CorpusWeights,
    /// Weights of the tag-weighted strategy.
    pub tags: TagWeights,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.kitmatch.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from an explicit list of files, highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any non-fatal warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML, in the same layout as a config file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableConfig {
            settings: &self.settings,
            catalog: SerializablePath::from(self.catalog.path.as_deref()),
            audit: SerializablePath::from(self.audit.path.as_deref()),
            corpus: &self.corpus,
            tags: &self.tags,
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Which scoring strategy ranks the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Direct overlap between preference tags and item tags.
    #[default]
    Tags,
    /// Vector-space similarity over the whole catalog plus the query.
    Corpus,
}

impl StrategyKind {
    /// Returns the lowercase name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::Corpus => "corpus",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tags" | "tag" => Ok(Self::Tags),
            "corpus" | "tfidf" => Ok(Self::Corpus),
            other => Err(format!("unknown strategy '{other}' (expected tags or corpus)")),
        }
    }
}

/// Revision of the keyword and canonical-tag tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetVersion {
    /// Table used by the relational web flow.
    V1,
    /// Richer parser table with hybrid, cinematic and tutorial tags.
    V2,
    /// Unified table with disjoint variant sets.
    #[default]
    V3,
}

impl RulesetVersion {
    /// Returns the lowercase name used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

impl fmt::Display for RulesetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Number of ranked results returned to the user.
    pub top_k: usize,
    /// Default scoring strategy.
    pub strategy: StrategyKind,
    /// Keyword table revision.
    pub ruleset: RulesetVersion,
    /// Stemming language, or `none` to leave tokens unchanged.
    pub stemmer: String,
    /// Extra stopword languages merged into the built-in function-word list.
    pub stopword_languages: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_k: 3,
            strategy: StrategyKind::default(),
            ruleset: RulesetVersion::default(),
            stemmer: String::from("none"),
            stopword_languages: Vec::new(),
        }
    }
}

/// Where the equipment catalog is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSettings {
    /// CSV file with catalog rows. `None` selects the built-in seed catalog.
    pub path: Option<PathBuf>,
}

/// Where recommendation runs are recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSettings {
    /// JSON-lines file the audit trail is appended to. `None` disables auditing.
    pub path: Option<PathBuf>,
}

/// Weights and thresholds of the corpus-similarity strategy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusWeights {
    /// Multiplier for cosine similarity.
    pub similarity: f64,
    /// Multiplier for query-token overlap.
    pub overlap: f64,
    /// Multiplier for the item rating (0-5).
    pub rating: f64,
    /// Multiplier for the budget factor.
    pub budget: f64,
    /// Subtracted when a daylight outdoor query meets low-light gear.
    pub lowlight_penalty: f64,
    /// Items with no overlap and similarity below this are dropped.
    pub relevance_floor: f64,
    /// Items priced above `budget * budget_slack` are dropped.
    pub budget_slack: f64,
    /// Lower clamp of the budget factor.
    pub budget_factor_floor: f64,
}

impl Default for CorpusWeights {
    fn default() -> Self {
        Self {
            similarity: 0.6,
            overlap: 0.25,
            rating: 0.05,
            budget: 0.10,
            lowlight_penalty: 0.15,
            relevance_floor: 0.02,
            budget_slack: 1.2,
            budget_factor_floor: 0.25,
        }
    }
}

/// Weights of the tag-weighted strategy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TagWeights {
    /// Bonus per shared environment tag.
    pub environment: f64,
    /// Bonus per shared focus tag.
    pub focus: f64,
    /// Penalty for a daylight query against gear not tagged outdoor.
    pub daylight_penalty: f64,
    /// Penalty for a low-light query against gear not tagged indoor.
    pub lowlight_penalty: f64,
    /// Reduction per step of price-band distance.
    pub band_step: f64,
    /// Floor of the price-band weight.
    pub band_floor: f64,
    /// Portability scale when the user asked for high mobility.
    pub mobility_priority_scale: f64,
    /// Portability scale otherwise.
    pub mobility_scale: f64,
    /// Bonus when item experience equals user expertise.
    pub experience_match: f64,
    /// Bonus when it does not.
    pub experience_mismatch: f64,
}

impl Default for TagWeights {
    fn default() -> Self {
        Self {
            environment: 1.5,
            focus: 2.0,
            daylight_penalty: 0.5,
            lowlight_penalty: 0.3,
            band_step: 0.25,
            band_floor: 0.5,
            mobility_priority_scale: 1.0,
            mobility_scale: 0.6,
            experience_match: 1.0,
            experience_mismatch: 0.5,
        }
    }
}

/// Borrowed view of the config used for TOML rendering.
#[derive(Serialize)]
struct SerializableConfig<'a> {
    /// General settings.
    settings: &'a Settings,
    /// Catalog section.
    catalog: SerializablePath,
    /// Audit section.
    audit: SerializablePath,
    /// Corpus weights.
    corpus: &'a CorpusWeights,
    /// Tag weights.
    tags: &'a TagWeights,
}

/// A section holding one optional path.
#[derive(Serialize)]
struct SerializablePath {
    /// Display form of the path; omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl From<Option<&Path>> for SerializablePath {
    fn from(path: Option<&Path>) -> Self {
        Self {
            path: path.map(|p| p.display().to_string()),
        }
    }
}
