//! Catalog item model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Band, CanonicalTag, Expertise};

/// A rentable equipment kit.
///
/// Kits are immutable for the duration of a recommendation call; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentKit {
    /// Display name, unique within a catalog (case-insensitively).
    pub name: String,
    /// Free-form category such as "Kamera" or "Audio".
    pub category: String,
    /// Rental price per day.
    pub price: i64,
    /// Units available.
    pub stock: i64,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Free-text description.
    pub description: String,
    /// Free-text "good for" notes.
    pub requirements: String,
    /// Environment tags, lowercase and sorted.
    pub environment: BTreeSet<String>,
    /// Content tags the kit suits, lowercase and sorted.
    pub best_for: BTreeSet<String>,
    /// Price band.
    pub price_band: Band,
    /// Portability band.
    pub portability: Band,
    /// Audio quality band.
    pub audio_quality: Band,
    /// Stabilization band.
    pub stabilization: Band,
    /// Experience level the kit suits.
    pub experience: Expertise,
    /// Items bundled in the kit.
    pub components: Vec<String>,
    /// Optional image reference.
    pub image: Option<String>,
}

impl Default for EquipmentKit {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: 0,
            stock: 0,
            rating: 0.0,
            description: String::new(),
            requirements: String::new(),
            environment: BTreeSet::new(),
            best_for: BTreeSet::new(),
            price_band: Band::Medium,
            portability: Band::Medium,
            audio_quality: Band::Medium,
            stabilization: Band::Medium,
            experience: Expertise::Beginner,
            components: Vec::new(),
            image: None,
        }
    }
}

impl EquipmentKit {
    /// Creates a kit with the given name and default attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Text the corpus strategy indexes: the "good for" notes followed by the description.
    pub fn corpus_text(&self) -> String {
        match (self.requirements.is_empty(), self.description.is_empty()) {
            (false, false) => format!("{} {}", self.requirements, self.description),
            (false, true) => self.requirements.clone(),
            (true, _) => self.description.clone(),
        }
    }

    /// True if the kit is tagged for an environment.
    pub fn has_environment(&self, tag: CanonicalTag) -> bool {
        self.environment.contains(tag.as_str())
    }

    /// True if the kit is tagged for a content focus.
    pub fn is_best_for(&self, tag: CanonicalTag) -> bool {
        self.best_for.contains(tag.as_str())
    }
}

/// Lowercases, trims and deduplicates tags, dropping empty ones.
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}
