//! Configuration merging.
//!
//! Merges several `RawConfig` files into one resolved `Config`.

use std::path::{Path, PathBuf};

use crate::{
    AuditSettings, CatalogSettings, Config, ConfigError, CorpusWeights, Settings, TagWeights,
    parse::{RawConfig, RawCorpusWeights, RawSettings, RawTagWeights},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory that relative paths in this file are anchored at.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges configuration files into a single resolved `Config`.
///
/// Configs are given highest precedence first. Every scalar takes the first defined value;
/// paths are resolved against the directory of the file that defined them.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut settings = Settings::default();
    let mut corpus = CorpusWeights::default();
    let mut tags = TagWeights::default();

    // Lowest precedence first so closer files overwrite.
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(s) = &raw.settings {
            apply_settings(&mut settings, s);
        }
        if let Some(c) = &raw.corpus {
            apply_corpus(&mut corpus, c);
        }
        if let Some(t) = &raw.tags {
            apply_tags(&mut tags, t);
        }
    }

    let catalog = CatalogSettings {
        path: first_path(configs, |raw| {
            raw.catalog.as_ref().and_then(|c| c.path.as_deref())
        })?,
    };
    let audit = AuditSettings {
        path: first_path(configs, |raw| raw.audit.as_ref().and_then(|a| a.path.as_deref()))?,
    };

    Ok(Config {
        settings,
        catalog,
        audit,
        corpus,
        tags,
    })
}

/// Resolves the first path selected by `pick`, relative to the file that defines it.
fn first_path<'a, F>(configs: &'a [ParsedConfig], pick: F) -> Result<Option<PathBuf>, ConfigError>
where
    F: Fn(&'a RawConfig) -> Option<&'a str>,
{
    configs
        .iter()
        .find_map(|parsed| pick(&parsed.config).map(|path| resolve_path(path, parsed.dir())))
        .transpose()
}

/// Applies raw settings, overwriting any present values.
fn apply_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(v) = raw.top_k {
        result.top_k = v;
    }
    if let Some(v) = raw.strategy {
        result.strategy = v;
    }
    if let Some(v) = raw.ruleset {
        result.ruleset = v;
    }
    if let Some(v) = &raw.stemmer {
        result.stemmer.clone_from(v);
    }
    if let Some(v) = &raw.stopword_languages {
        result.stopword_languages.clone_from(v);
    }
}

/// Applies raw corpus weights.
fn apply_corpus(result: &mut CorpusWeights, raw: &RawCorpusWeights) {
    let fields = [
        (&mut result.similarity, raw.similarity),
        (&mut result.overlap, raw.overlap),
        (&mut result.rating, raw.rating),
        (&mut result.budget, raw.budget),
        (&mut result.lowlight_penalty, raw.lowlight_penalty),
        (&mut result.relevance_floor, raw.relevance_floor),
        (&mut result.budget_slack, raw.budget_slack),
        (&mut result.budget_factor_floor, raw.budget_factor_floor),
    ];
    for (slot, value) in fields {
        if let Some(v) = value {
            *slot = v;
        }
    }
}

/// Applies raw tag weights.
fn apply_tags(result: &mut TagWeights, raw: &RawTagWeights) {
    let fields = [
        (&mut result.environment, raw.environment),
        (&mut result.focus, raw.focus),
        (&mut result.daylight_penalty, raw.daylight_penalty),
        (&mut result.lowlight_penalty, raw.lowlight_penalty),
        (&mut result.band_step, raw.band_step),
        (&mut result.band_floor, raw.band_floor),
        (&mut result.mobility_priority_scale, raw.mobility_priority_scale),
        (&mut result.mobility_scale, raw.mobility_scale),
        (&mut result.experience_match, raw.experience_match),
        (&mut result.experience_mismatch, raw.experience_mismatch),
    ];
    for (slot, value) in fields {
        if let Some(v) = value {
            *slot = v;
        }
    }
}
