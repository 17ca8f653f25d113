//! Ranking of scored kits.
//!
//! Sorts by score descending with a stable sort, so kits with equal scores keep their catalog
//! order, then truncates to the requested number of results.

use serde::Serialize;

use crate::strategy::{Breakdown, ScoreResult};

/// A kit's place in a ranked shortlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedKit {
    /// 1-based position.
    pub rank: usize,
    /// Position of the kit in the catalog snapshot.
    pub index: usize,
    /// Kit name.
    pub name: String,
    /// Final score.
    pub score: f64,
    /// Sub-scores.
    pub breakdown: Breakdown,
    /// One-line justification.
    pub reason: String,
}

impl RankedKit {
    /// Packages a score result at a position.
    fn new(rank: usize, result: ScoreResult) -> Self {
        let reason = result.reason();
        Self {
            rank,
            index: result.index,
            name: result.name,
            score: result.score,
            breakdown: result.breakdown,
            reason,
        }
    }
}

/// Orders scored kits best first and keeps the top `top_k`.
pub fn rank(mut scored: Vec<ScoreResult>, top_k: usize) -> Vec<RankedKit> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
        .into_iter()
        .take(top_k)
        .enumerate()
        .map(|(i, result)| RankedKit::new(i + 1, result))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::strategy::TagBreakdown;

    fn scored(index: usize, score: f64) -> ScoreResult {
        ScoreResult {
            index,
            name: format!("kit-{index}"),
            score,
            breakdown: Breakdown::Tags(TagBreakdown::default()),
        }
    }

    #[test]
    fn sorts_descending() {
        let ranked = rank(vec![scored(0, 1.0), scored(1, 3.0), scored(2, 2.0)], 10);
        let order: Vec<_> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let ranked = rank(
            vec![scored(0, 2.0), scored(1, 5.0), scored(2, 2.0), scored(3, 2.0)],
            10,
        );
        let order: Vec<_> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn truncates_to_top_k() {
        let ranked = rank(vec![scored(0, 1.0), scored(1, 2.0), scored(2, 3.0)], 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].index, 1);
        assert!(rank(vec![scored(0, 1.0)], 0).is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(rank(Vec::new(), 3).is_empty());
    }

    #[test]
    fn reason_is_packaged() {
        let ranked = rank(vec![scored(0, 1.0)], 1);
        assert_eq!(ranked[0].reason, TagBreakdown::default().to_string());
    }
}
