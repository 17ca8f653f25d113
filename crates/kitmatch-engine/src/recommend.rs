//! Recommendation entry point.
//!
//! `Recommender` ties the pipeline together: analyze the request, extract a preference, reject
//! requests without signals, score the catalog with the chosen strategy, rank, and hand the
//! outcome to the audit sink.

use std::sync::Arc;

use kitmatch_config::{Config, StrategyKind};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    Analysis, Analyzer, AuditRecord, AuditSink, CanonicalTag, EquipmentKit, MatchError,
    Preference, PreferenceExtractor, RankedKit, rank,
    strategy::{CorpusStrategy, Query, Strategy, TagStrategy},
};

/// A recommendation request.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Free-text description of the need.
    pub text: String,
    /// Structured preference; replaces extraction from `text` when set.
    pub preference: Option<Preference>,
    /// Budget; 0 or less means unconstrained.
    pub budget: i64,
    /// Result count; the recommender default when unset.
    pub top_k: Option<usize>,
    /// Strategy; the recommender default when unset.
    pub strategy: Option<StrategyKind>,
}

impl Request {
    /// Creates a free-text request.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates a request from an already structured preference.
    pub fn preference(preference: Preference) -> Self {
        Self {
            preference: Some(preference),
            ..Self::default()
        }
    }

    /// Sets the budget.
    pub fn with_budget(mut self, budget: i64) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the result count.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = Some(strategy);
        self
    }
}

/// Outcome of a recommendation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// The prepared query, with the environment fallback applied.
    pub query: Query,
    /// Strategy that ranked the catalog.
    pub strategy: StrategyKind,
    /// Ranked shortlist, best first.
    pub results: Vec<RankedKit>,
}

/// Matches requests against catalog snapshots.
pub struct Recommender {
    /// Shared text pipeline.
    analyzer: Arc<Analyzer>,
    /// Preference extraction.
    extractor: PreferenceExtractor,
    /// Corpus similarity strategy.
    corpus: CorpusStrategy,
    /// Tag-weighted strategy.
    tags: TagStrategy,
    /// Default result count.
    top_k: usize,
    /// Default strategy.
    strategy: StrategyKind,
    /// Optional audit sink.
    audit: Option<Box<dyn AuditSink>>,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_analyzer(Analyzer::default(), &Config::default())
    }
}

impl Recommender {
    /// Builds a recommender from resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self, MatchError> {
        let analyzer = Analyzer::from_settings(&config.settings)?;
        Ok(Self::with_analyzer(analyzer, config))
    }

    /// Builds a recommender around an analyzer, taking weights and defaults from `config`.
    fn with_analyzer(analyzer: Analyzer, config: &Config) -> Self {
        let extractor = PreferenceExtractor::new(analyzer.ruleset());
        let analyzer = Arc::new(analyzer);
        Self {
            corpus: CorpusStrategy::new(Arc::clone(&analyzer), config.corpus.clone()),
            tags: TagStrategy::new(config.tags.clone()),
            analyzer,
            extractor,
            top_k: config.settings.top_k,
            strategy: config.settings.strategy,
            audit: None,
        }
    }

    /// Attaches an audit sink.
    pub fn with_audit_sink(mut self, sink: Box<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Returns the text pipeline.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Returns the strategy implementation for a kind.
    pub fn strategy(&self, kind: StrategyKind) -> &dyn Strategy {
        match kind {
            StrategyKind::Corpus => &self.corpus,
            StrategyKind::Tags => &self.tags,
        }
    }

    /// Analyzes text and extracts its preference without ranking anything.
    pub fn parse(&self, text: &str) -> (Analysis, Preference) {
        let analysis = self.analyzer.analyze(text);
        let preference = self.extractor.extract(&analysis.tokens);
        (analysis, preference)
    }

    /// Turns a request into a scorable query.
    pub fn prepare(&self, request: &Request) -> Query {
        let (analysis, extracted) = self.parse(&request.text);
        Query {
            text: request.text.clone(),
            analysis,
            preference: request.preference.clone().unwrap_or(extracted),
            budget: request.budget,
        }
    }

    /// Ranks the catalog for a request.
    ///
    /// Fails with [`MatchError::Validation`] when the request carries no preference signal and
    /// with [`MatchError::EmptyCatalog`] when there is nothing to rank. An empty shortlist, for
    /// example when every kit is over budget, is not an error.
    pub fn recommend(
        &self,
        request: &Request,
        catalog: &[EquipmentKit],
    ) -> Result<Recommendation, MatchError> {
        let mut query = self.prepare(request);
        if !query.preference.has_signals() {
            return Err(MatchError::vague_request());
        }
        if catalog.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }
        if query.preference.environment.is_empty() {
            query.preference.environment = [CanonicalTag::Indoor, CanonicalTag::Outdoor].into();
        }

        let kind = request.strategy.unwrap_or(self.strategy);
        let top_k = request.top_k.unwrap_or(self.top_k);
        let scored = self.strategy(kind).score(&query, catalog);
        debug!(strategy = %kind, scored = scored.len(), top_k, "ranking");
        let results = rank(scored, top_k);

        self.record(&query, kind, &results);
        Ok(Recommendation {
            query,
            strategy: kind,
            results,
        })
    }

    /// Sends the outcome to the audit sink, if any. Failures are logged and dropped.
    fn record(&self, query: &Query, strategy: StrategyKind, results: &[RankedKit]) {
        let Some(sink) = &self.audit else {
            return;
        };
        let record = AuditRecord {
            query: &query.text,
            budget: query.budget,
            strategy,
            results,
        };
        if let Err(e) = sink.record(&record) {
            warn!(error = %e, "audit sink failed");
        }
    }
}
