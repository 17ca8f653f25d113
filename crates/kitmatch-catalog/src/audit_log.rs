//! JSON-lines audit log.
//!
//! Each recommendation appends one line:
//!
//! ```json
//! {"timestamp":"2026-01-01T10:00:00Z","query":"...","budget":0,"strategy":"tags",
//!  "results":[{"rank":1,"name":"...","score":1.5,"reason":"..."}]}
//! ```

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use kitmatch_engine::{AuditError, AuditRecord, AuditSink};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::AuditLogError;

/// One line of the audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the recommendation finished.
    pub timestamp: DateTime<Utc>,
    /// Request text.
    pub query: String,
    /// Request budget.
    pub budget: i64,
    /// Strategy name.
    pub strategy: String,
    /// Ranked results.
    pub results: Vec<AuditResult>,
}

/// A ranked kit as stored in the audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    /// 1-based position.
    pub rank: usize,
    /// Kit name.
    pub name: String,
    /// Final score.
    pub score: f64,
    /// Justification line.
    pub reason: String,
}

impl AuditEntry {
    /// Captures a record with the current time.
    pub fn from_record(record: &AuditRecord<'_>) -> Self {
        Self {
            timestamp: Utc::now(),
            query: record.query.to_string(),
            budget: record.budget,
            strategy: record.strategy.as_str().to_string(),
            results: record
                .results
                .iter()
                .map(|r| AuditResult {
                    rank: r.rank,
                    name: r.name.clone(),
                    score: r.score,
                    reason: r.reason.clone(),
                })
                .collect(),
        }
    }
}

/// Appends audit entries to a file, one JSON object per line.
pub struct JsonlAuditLog {
    /// Log file path; created on first write.
    path: PathBuf,
    /// Serializes appends from concurrent recommendations.
    lock: Mutex<()>,
}

impl JsonlAuditLog {
    /// Creates a log that appends to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the log path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry.
    pub fn append(&self, entry: &AuditEntry) -> Result<(), AuditLogError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let io_err = |source: io::Error| AuditLogError::Io {
            path: self.path.clone(),
            source,
        };
        let _guard = self.lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        file.write_all(line.as_bytes()).map_err(io_err)
    }
}

impl AuditSink for JsonlAuditLog {
    fn record(&self, record: &AuditRecord<'_>) -> Result<(), AuditError> {
        self.append(&AuditEntry::from_record(record))
            .map_err(AuditError::new)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use kitmatch_config::StrategyKind;

    use super::*;

    fn record(query: &str) -> AuditRecord<'_> {
        AuditRecord {
            query,
            budget: 300,
            strategy: StrategyKind::Corpus,
            results: &[],
        }
    }

    #[test]
    fn appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlAuditLog::new(dir.path().join("audit.jsonl"));
        log.record(&record("vlog outdoor")).unwrap();
        log.record(&record("podcast studio")).unwrap();

        let text = fs::read_to_string(log.path()).unwrap();
        let entries: Vec<AuditEntry> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query, "vlog outdoor");
        assert_eq!(entries[0].strategy, "corpus");
        assert_eq!(entries[1].budget, 300);
        assert!(entries[1].results.is_empty());
    }

    #[test]
    fn missing_directory_is_an_audit_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlAuditLog::new(dir.path().join("nope/audit.jsonl"));
        let err = log.record(&record("x")).unwrap_err();
        assert!(err.to_string().starts_with("audit sink failed:"));
    }
}
