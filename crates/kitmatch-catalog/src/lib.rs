//! Catalog sources and audit logging for kitmatch.
//!
//! Catalogs come from a CSV file ([`CsvCatalog`]) or the compiled-in demonstration data
//! ([`SeedCatalog`]). Either sits behind a [`CatalogRepository`], which hands out shared
//! snapshots so a catalog can be swapped while recommendations are running.
//! [`JsonlAuditLog`] is the file-backed audit sink.

#![warn(missing_docs)]

mod audit_log;
mod csv_source;
mod error;
mod repository;
mod seed;

pub use audit_log::{AuditEntry, AuditResult, JsonlAuditLog};
pub use csv_source::{CsvCatalog, LoadReport, LoadedCatalog, read_csv, read_csv_path};
pub use error::{AuditLogError, CatalogError};
pub use repository::{CatalogProvider, CatalogRepository, Snapshot};
pub use seed::SeedCatalog;
