//! Structured preferences and their extraction from tokens.

use std::collections::{BTreeSet, HashSet};

use kitmatch_config::TagWeights;
use serde::Serialize;
use tracing::debug;

use crate::{Band, CanonicalMap, CanonicalTag, Expertise, Lighting, Ruleset};

/// Structured intent extracted from a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preference {
    /// Environment tags (`outdoor`, `indoor`, `hybrid`).
    pub environment: BTreeSet<CanonicalTag>,
    /// Content focus tags.
    pub focus: BTreeSet<CanonicalTag>,
    /// Budget band.
    pub budget: Band,
    /// Mobility band.
    pub mobility: Band,
    /// Creator experience.
    pub expertise: Expertise,
    /// Audio quality matters.
    pub audio_priority: bool,
    /// Stabilization matters.
    pub stabilization_priority: bool,
    /// Lighting bias.
    pub lighting: Lighting,
}

impl Preference {
    /// True if any field differs from its default.
    ///
    /// A preference without signals would rank on price and experience alone, so callers
    /// reject it.
    pub fn has_signals(&self) -> bool {
        *self != Self::default()
    }

    /// Bonus for a kit's price band: full weight on the requested band, one `band_step` less
    /// per band of distance, never below `band_floor`.
    pub fn weight_for_band(&self, band: Band, weights: &TagWeights) -> f64 {
        let distance = f64::from(self.budget.order().abs_diff(band.order()));
        (1.0 - weights.band_step * distance).max(weights.band_floor)
    }
}

/// Turns token sequences into preferences.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceExtractor {
    /// Tag mapper sharing the extractor's ruleset.
    canon: CanonicalMap,
}

impl PreferenceExtractor {
    /// Creates an extractor over a ruleset.
    pub fn new(ruleset: &'static Ruleset) -> Self {
        Self {
            canon: CanonicalMap::new(ruleset),
        }
    }

    /// Extracts a preference from tokenized (not normalized) text.
    pub fn extract(&self, tokens: &[String]) -> Preference {
        let ruleset = self.canon.ruleset();
        let joined = self.canon.join_compounds(tokens);
        let present: HashSet<&str> = joined.iter().map(String::as_str).collect();
        let any = |keywords: &[&str]| keywords.iter().any(|k| present.contains(*k));

        let mut pref = Preference::default();
        for tag in self.canon.hits(tokens) {
            if tag.is_environment() {
                pref.environment.insert(tag);
            } else {
                pref.focus.insert(tag);
                if ruleset.implied_environments
                    && let Some(environment) = tag.implied_environment()
                {
                    pref.environment.insert(environment);
                }
            }
        }

        if let Some(band) = first_match(ruleset.budget, &any) {
            pref.budget = band;
        }
        if let Some(band) = first_match(ruleset.mobility, &any) {
            pref.mobility = band;
        }
        if let Some(level) = first_match(ruleset.expertise, &any) {
            pref.expertise = level;
        }

        pref.audio_priority = any(ruleset.audio);
        pref.stabilization_priority = any(ruleset.stabilization);

        pref.lighting = if any(ruleset.daylight) {
            Lighting::Daylight
        } else if any(ruleset.lowlight) {
            Lighting::Lowlight
        } else {
            Lighting::Neutral
        };

        debug!(
            tokens = tokens.len(),
            environment = pref.environment.len(),
            focus = pref.focus.len(),
            signals = pref.has_signals(),
            "extracted preference"
        );
        pref
    }
}

/// Returns the label of the first rule whose keywords are present.
fn first_match<L: Copy>(
    rules: &[(L, &'static [&'static str])],
    any: &impl Fn(&[&str]) -> bool,
) -> Option<L> {
    rules
        .iter()
        .find(|(_, keywords)| any(keywords))
        .map(|(label, _)| *label)
}
