//! Scoring strategies.
//!
//! Both strategies score a prepared [`Query`] against a catalog snapshot and return unsorted
//! [`ScoreResult`]s; ordering and truncation belong to the ranker.
//!
//! - **Corpus**: TF-IDF similarity over the catalog plus the query, token overlap, rating and
//!   budget bonuses, a low-light penalty, a relevance floor and a budget filter.
//! - **Tags**: additive bonuses for preference tags shared with kit tags plus band, mobility,
//!   experience and priority terms. Never excludes a kit.

mod corpus;
mod tags;

use std::fmt;

pub use corpus::{CorpusBreakdown, CorpusStrategy, budget_factor};
use kitmatch_config::StrategyKind;
use serde::Serialize;
pub use tags::{TagBreakdown, TagStrategy};

use crate::{Analysis, EquipmentKit, Preference};

/// A request prepared for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Query {
    /// Request text as given; empty for structured requests.
    pub text: String,
    /// Analyzed request text.
    pub analysis: Analysis,
    /// Structured preference.
    pub preference: Preference,
    /// Budget; 0 or less means unconstrained.
    pub budget: i64,
}

/// A way of scoring kits against a query.
pub trait Strategy: Send + Sync {
    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Scores the catalog. Kits may be left out; the result is in catalog order.
    fn score(&self, query: &Query, catalog: &[EquipmentKit]) -> Vec<ScoreResult>;
}

/// Score of one kit with the terms that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Position of the kit in the catalog snapshot.
    pub index: usize,
    /// Kit name.
    pub name: String,
    /// Final score.
    pub score: f64,
    /// Sub-scores.
    pub breakdown: Breakdown,
}

impl ScoreResult {
    /// One-line justification of the score.
    pub fn reason(&self) -> String {
        self.breakdown.to_string()
    }
}

/// Sub-scores of either strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum Breakdown {
    /// Corpus strategy terms.
    Corpus(CorpusBreakdown),
    /// Tag strategy terms.
    Tags(TagBreakdown),
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corpus(b) => b.fmt(f),
            Self::Tags(b) => b.fmt(f),
        }
    }
}
