//! Tag-weighted strategy.

use std::fmt;

use kitmatch_config::{StrategyKind, TagWeights};
use serde::Serialize;
use tracing::debug;

use super::{Breakdown, Query, ScoreResult, Strategy};
use crate::{Band, CanonicalTag, EquipmentKit, Lighting, Preference};

/// Terms of a tag-strategy score. Each field is a signed contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TagBreakdown {
    /// Shared environment tags.
    pub environment: f64,
    /// Lighting mismatch penalty (zero or negative).
    pub lighting: f64,
    /// Shared focus tags.
    pub focus: f64,
    /// Price band closeness.
    pub price_band: f64,
    /// Portability bonus.
    pub mobility: f64,
    /// Experience match bonus.
    pub experience: f64,
    /// Audio quality bonus.
    pub audio: f64,
    /// Stabilization bonus.
    pub stabilization: f64,
}

impl TagBreakdown {
    /// Sum of all terms.
    pub fn total(&self) -> f64 {
        self.environment
            + self.lighting
            + self.focus
            + self.price_band
            + self.mobility
            + self.experience
            + self.audio
            + self.stabilization
    }
}

impl fmt::Display for TagBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "environment={:+.2}, lighting={:+.2}, focus={:+.2}, price_band={:+.2}, \
             mobility={:+.2}, experience={:+.2}, audio={:+.2}, stabilization={:+.2}",
            self.environment,
            self.lighting,
            self.focus,
            self.price_band,
            self.mobility,
            self.experience,
            self.audio,
            self.stabilization
        )
    }
}

/// Value of a portability or quality band.
fn band_value(band: Band) -> f64 {
    match band {
        Band::High => 1.0,
        Band::Medium => 0.5,
        Band::Low => 0.0,
    }
}

/// Scores kits by structured preference overlap. Every kit gets a score.
#[derive(Debug, Clone, Default)]
pub struct TagStrategy {
    /// Term weights.
    weights: TagWeights,
}

impl TagStrategy {
    /// Creates the strategy.
    pub fn new(weights: TagWeights) -> Self {
        Self { weights }
    }

    /// Scores a single kit.
    pub fn score_kit(&self, pref: &Preference, kit: &EquipmentKit) -> TagBreakdown {
        let w = &self.weights;
        let mut b = TagBreakdown::default();

        if !pref.environment.is_empty() {
            let shared = pref
                .environment
                .iter()
                .filter(|tag| kit.has_environment(**tag))
                .count();
            b.environment = w.environment * shared as f64;

            if pref.lighting == Lighting::Daylight && !kit.has_environment(CanonicalTag::Outdoor)
            {
                b.lighting -= w.daylight_penalty;
            }
            if pref.lighting == Lighting::Lowlight && !kit.has_environment(CanonicalTag::Indoor) {
                b.lighting -= w.lowlight_penalty;
            }
        }

        let shared_focus = pref.focus.iter().filter(|tag| kit.is_best_for(**tag)).count();
        b.focus = w.focus * shared_focus as f64;

        b.price_band = pref.weight_for_band(kit.price_band, w);

        let mobility_scale = if pref.mobility == Band::High {
            w.mobility_priority_scale
        } else {
            w.mobility_scale
        };
        b.mobility = band_value(kit.portability) * mobility_scale;

        b.experience = if kit.experience == pref.expertise {
            w.experience_match
        } else {
            w.experience_mismatch
        };

        if pref.audio_priority {
            b.audio = band_value(kit.audio_quality);
        }
        if pref.stabilization_priority {
            b.stabilization = band_value(kit.stabilization);
        }

        b
    }
}

impl Strategy for TagStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Tags
    }

    fn score(&self, query: &Query, catalog: &[EquipmentKit]) -> Vec<ScoreResult> {
        debug!(kits = catalog.len(), "tag scoring");
        catalog
            .iter()
            .enumerate()
            .map(|(index, kit)| {
                let breakdown = self.score_kit(&query.preference, kit);
                ScoreResult {
                    index,
                    name: kit.name.clone(),
                    score: breakdown.total(),
                    breakdown: Breakdown::Tags(breakdown),
                }
            })
            .collect()
    }
}
