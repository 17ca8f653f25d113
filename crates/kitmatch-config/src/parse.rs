//! Configuration file parsing.
//!
//! Parses individual `.kitmatch.toml` files into `RawConfig` structures whose fields are all
//! optional, so partial files can be merged by precedence.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{ConfigError, RulesetVersion, StrategyKind};

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Catalog section.
    pub catalog: Option<RawCatalogSettings>,
    /// Audit section.
    pub audit: Option<RawAuditSettings>,
    /// Corpus-strategy weights.
    pub corpus: Option<RawCorpusWeights>,
    /// Tag-strategy weights.
    pub tags: Option<RawTagWeights>,
}

/// Raw general settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    /// Number of ranked results.
    pub top_k: Option<usize>,
    /// Default scoring strategy.
    pub strategy: Option<StrategyKind>,
    /// Keyword table revision.
    pub ruleset: Option<RulesetVersion>,
    /// Stemming language.
    pub stemmer: Option<String>,
    /// Extra stopword languages; a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub stopword_languages: Option<Vec<String>>,
}

/// Raw catalog section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCatalogSettings {
    /// CSV path, relative to the config file that defines it.
    pub path: Option<String>,
}

/// Raw audit section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawAuditSettings {
    /// JSON-lines path, relative to the config file that defines it.
    pub path: Option<String>,
}

/// Raw corpus-strategy weights.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCorpusWeights {
    /// Cosine similarity multiplier.
    pub similarity: Option<f64>,
    /// Overlap multiplier.
    pub overlap: Option<f64>,
    /// Rating multiplier.
    pub rating: Option<f64>,
    /// Budget factor multiplier.
    pub budget: Option<f64>,
    /// Low-light gear penalty.
    pub lowlight_penalty: Option<f64>,
    /// Relevance floor for similarity.
    pub relevance_floor: Option<f64>,
    /// Price slack over budget.
    pub budget_slack: Option<f64>,
    /// Budget factor lower clamp.
    pub budget_factor_floor: Option<f64>,
}

/// Raw tag-strategy weights.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawTagWeights {
    /// Bonus per shared environment tag.
    pub environment: Option<f64>,
    /// Bonus per shared focus tag.
    pub focus: Option<f64>,
    /// Daylight mismatch penalty.
    pub daylight_penalty: Option<f64>,
    /// Low-light mismatch penalty.
    pub lowlight_penalty: Option<f64>,
    /// Price-band step.
    pub band_step: Option<f64>,
    /// Price-band floor.
    pub band_floor: Option<f64>,
    /// Portability scale for high-mobility requests.
    pub mobility_priority_scale: Option<f64>,
    /// Portability scale otherwise.
    pub mobility_scale: Option<f64>,
    /// Experience match bonus.
    pub experience_match: Option<f64>,
    /// Experience mismatch bonus.
    pub experience_mismatch: Option<f64>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string; `path` is only used in errors.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Unreadable or unparsable files count as non-root; the error surfaces later when the file
/// is loaded for real.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|config| config.root == Some(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> RawConfig {
        parse_config_str(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn empty_config_has_no_sections() {
        let config = parse("");
        assert!(config.root.is_none());
        assert!(config.settings.is_none());
        assert!(config.catalog.is_none());
        assert!(config.corpus.is_none());
    }

    #[test]
    fn settings_section() {
        let config = parse(
            r#"
[settings]
top_k = 5
strategy = "corpus"
ruleset = "v1"
stemmer = "english"
"#,
        );
        let settings = config.settings.unwrap();
        assert_eq!(settings.top_k, Some(5));
        assert_eq!(settings.strategy, Some(StrategyKind::Corpus));
        assert_eq!(settings.ruleset, Some(RulesetVersion::V1));
        assert_eq!(settings.stemmer.as_deref(), Some("english"));
        assert!(settings.stopword_languages.is_none());
    }

    #[test]
    fn stopword_languages_accepts_single_string() {
        let config = parse("[settings]\nstopword_languages = \"english\"\n");
        assert_eq!(
            config.settings.unwrap().stopword_languages,
            Some(vec!["english".to_string()])
        );
    }

    #[test]
    fn stopword_languages_accepts_array() {
        let config = parse("[settings]\nstopword_languages = [\"english\", \"indonesian\"]\n");
        assert_eq!(
            config.settings.unwrap().stopword_languages.map(|l| l.len()),
            Some(2)
        );
    }

    #[test]
    fn partial_weights() {
        let config = parse("[corpus]\nsimilarity = 0.7\n\n[tags]\nfocus = 3.0\n");
        let corpus = config.corpus.unwrap();
        assert_eq!(corpus.similarity, Some(0.7));
        assert!(corpus.overlap.is_none());
        assert_eq!(config.tags.unwrap().focus, Some(3.0));
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let err = parse_config_str("[settings]\nstrategy = \"bm25\"\n", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let result = parse_config_str("[catalog]\nfile = \"kits.csv\"\n", Path::new("x.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let result = parse_config_str("[settings\n", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }
}
