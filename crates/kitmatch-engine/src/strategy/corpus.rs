//! Corpus similarity strategy.

use std::{collections::HashSet, fmt, sync::Arc};

use kitmatch_config::{CorpusWeights, StrategyKind};
use serde::Serialize;
use tracing::{debug, trace};

use super::{Breakdown, Query, ScoreResult, Strategy};
use crate::{Analysis, Analyzer, ContentFlags, EquipmentKit, vector::VectorSpace};

/// Terms of a corpus-strategy score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorpusBreakdown {
    /// Cosine similarity between query and kit text.
    pub similarity: f64,
    /// Share of distinct query terms found in the kit text.
    pub overlap: f64,
    /// Kit rating.
    pub rating: f64,
    /// Affordability in `[floor, 1]`.
    pub budget_factor: f64,
    /// Low-light gear penalty.
    pub penalty: f64,
    /// Orientation flags of the kit text.
    pub flags: ContentFlags,
}

impl CorpusBreakdown {
    /// Weighted sum of the terms.
    pub fn total(&self, weights: &CorpusWeights) -> f64 {
        weights.similarity * self.similarity
            + weights.overlap * self.overlap
            + weights.rating * self.rating
            + weights.budget * self.budget_factor
            - self.penalty
    }
}

impl fmt::Display for CorpusBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "similarity={:.2}, overlap={:.2}, rating={}, budget_factor={:.2}, penalty={:.2}, flags={}",
            self.similarity,
            self.overlap,
            self.rating,
            self.budget_factor,
            self.penalty,
            self.flags
        )
    }
}

/// Affordability of a price under a budget.
///
/// `1.0` without a budget; otherwise the share of the budget left after paying, kept within
/// `[floor, 1.0]`.
pub fn budget_factor(budget: i64, price: i64, floor: f64) -> f64 {
    if budget <= 0 {
        return 1.0;
    }
    let remaining = (budget as f64 - price as f64) / budget as f64;
    remaining.min(1.0).max(floor)
}

/// Share of distinct query terms that also occur in the kit terms.
fn overlap(query: &HashSet<&str>, kit_terms: &[String]) -> f64 {
    if query.is_empty() {
        return 0.0;
    }
    let kit: HashSet<&str> = kit_terms.iter().map(String::as_str).collect();
    query.intersection(&kit).count() as f64 / query.len() as f64
}

/// Scores kits by text similarity to the request.
///
/// The vector space is rebuilt for every query with the query itself as a corpus member, so
/// IDF weights depend on the request.
pub struct CorpusStrategy {
    /// Pipeline used for kit text, shared with the query side.
    analyzer: Arc<Analyzer>,
    /// Term weights and thresholds.
    weights: CorpusWeights,
}

impl CorpusStrategy {
    /// Creates the strategy.
    pub fn new(analyzer: Arc<Analyzer>, weights: CorpusWeights) -> Self {
        Self { analyzer, weights }
    }

    /// Penalty for recommending low-light gear for a daylight outdoor shoot.
    fn penalty(&self, query: ContentFlags, kit: ContentFlags) -> f64 {
        if query.outdoor && !query.lowlight && kit.lowlight {
            self.weights.lowlight_penalty
        } else {
            0.0
        }
    }
}

impl Strategy for CorpusStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Corpus
    }

    fn score(&self, query: &Query, catalog: &[EquipmentKit]) -> Vec<ScoreResult> {
        let kits: Vec<Analysis> = catalog
            .iter()
            .map(|kit| self.analyzer.analyze(&kit.corpus_text()))
            .collect();

        let mut documents: Vec<Vec<String>> = kits.iter().map(|a| a.terms.clone()).collect();
        documents.push(query.analysis.terms.clone());
        let space = VectorSpace::fit(&documents);
        let query_doc = catalog.len();
        let query_terms: HashSet<&str> = query.analysis.terms.iter().map(String::as_str).collect();

        let w = &self.weights;
        let mut results = Vec::new();
        for (index, (kit, analysis)) in catalog.iter().zip(&kits).enumerate() {
            let similarity = space.cosine(query_doc, index);
            let overlap = overlap(&query_terms, &analysis.terms);
            if overlap <= 0.0 && similarity < w.relevance_floor {
                trace!(kit = %kit.name, similarity, "below relevance floor");
                continue;
            }
            if query.budget > 0 && kit.price as f64 > query.budget as f64 * w.budget_slack {
                trace!(kit = %kit.name, price = kit.price, "over budget");
                continue;
            }

            let breakdown = CorpusBreakdown {
                similarity,
                overlap,
                rating: kit.rating,
                budget_factor: budget_factor(query.budget, kit.price, w.budget_factor_floor),
                penalty: self.penalty(query.analysis.flags, analysis.flags),
                flags: analysis.flags,
            };
            results.push(ScoreResult {
                index,
                name: kit.name.clone(),
                score: breakdown.total(w),
                breakdown: Breakdown::Corpus(breakdown),
            });
        }

        debug!(
            kits = catalog.len(),
            terms = space.dimensions(),
            kept = results.len(),
            "corpus scoring"
        );
        results
    }
}
