//! Audit sink contract.
//!
//! A sink receives every completed recommendation. Sinks are optional and their failures never
//! fail the recommendation itself.

use kitmatch_config::StrategyKind;
use serde::Serialize;

use crate::{AuditError, RankedKit};

/// What gets recorded for one recommendation call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AuditRecord<'a> {
    /// Request text.
    pub query: &'a str,
    /// Request budget.
    pub budget: i64,
    /// Strategy that ranked the catalog.
    pub strategy: StrategyKind,
    /// Ranked results as returned to the caller.
    pub results: &'a [RankedKit],
}

/// Receives audit records.
pub trait AuditSink: Send + Sync {
    /// Records one recommendation.
    fn record(&self, record: &AuditRecord<'_>) -> Result<(), AuditError>;
}
