//! Matching and ranking engine for equipment kit recommendations.
//!
//! A request flows through a fixed pipeline:
//!
//! 1. **Tokenizer**: lowercase alphanumeric tokens with stopwords removed
//! 2. **Canonical mapping**: keyword variants collapse onto a fixed tag vocabulary
//! 3. **Preference extraction**: environment, focus, budget, mobility, expertise, priorities
//!    and lighting
//! 4. **Scoring**: one of two interchangeable strategies
//! 5. **Ranking**: stable descending sort, truncation, and a justification per result
//!
//! ## Strategies
//!
//! - **Tags** (default): additive bonuses for preference tags shared with kit tags plus band,
//!   mobility, experience and priority terms
//! - **Corpus**: TF-IDF similarity over the catalog and the request, token overlap, rating and
//!   budget terms, with a relevance floor and a budget filter
//!
//! Keyword tables are versioned data ([`Ruleset`]); [`RULESET_VERSION`] names the default.

#![warn(missing_docs)]

mod analyze;
mod audit;
mod canon;
mod error;
pub mod kit;
mod preference;
mod rank;
mod recommend;
mod ruleset;
mod stopwords;
pub mod strategy;
mod tag;
mod tokenize;
mod vector;

pub use analyze::{Analysis, Analyzer};
pub use audit::{AuditRecord, AuditSink};
pub use canon::{CanonicalMap, ContentFlags};
pub use error::{AuditError, MatchError, VAGUE_REQUEST_HINT};
pub use kit::{EquipmentKit, normalize_tags};
pub use preference::{Preference, PreferenceExtractor};
pub use rank::{RankedKit, rank};
pub use recommend::{Recommendation, Recommender, Request};
pub use ruleset::{RULESET_VERSION, Ruleset};
pub use stopwords::Stopwords;
pub use strategy::{Breakdown, Query, ScoreResult, Strategy};
pub use tag::{Band, CanonicalTag, Expertise, Lighting};
pub use tokenize::{Tokenizer, parse_stemmer};
pub use vector::VectorSpace;
