//! End-to-end tests: CSV on disk through the repository into the recommender and audit log.

use std::{fs, path::PathBuf, sync::Arc};

use kitmatch_catalog::{
    AuditEntry, CatalogError, CatalogProvider, CatalogRepository, CsvCatalog, JsonlAuditLog,
    SeedCatalog,
};
use kitmatch_config::StrategyKind;
use kitmatch_engine::{Recommender, Request};
use tempfile::TempDir;

const INVENTORY: &str = "\
nama_alat,kategori,harga_sewa,stok,rating_alat,deskripsi,kebutuhan_konten
Sony ZV-1,Kamera,250,5,4.5,Kamera compact untuk vlog,vlog travel outdoor
Godox SL60W,Pencahayaan,abc,7,4.4,Lampu continuous,studio podcast indoor
,Audio,100,1,4.0,Tanpa nama,podcast
sony zv-1,Kamera,999,1,1.0,Duplikat,vlog
";

fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("kits.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn inventory_file_loads_with_report() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CsvCatalog::new(write_csv(&dir, INVENTORY));
    let loaded = catalog.load().unwrap();
    assert_eq!(loaded.report.added, 2);
    assert_eq!(loaded.report.skipped, 2);

    let godox = loaded.kits.iter().find(|k| k.name == "Godox SL60W").unwrap();
    assert_eq!(godox.price, 0);
    assert_eq!(godox.stock, 7);
}

#[test]
fn repository_serves_one_snapshot_until_invalidated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, INVENTORY);
    let repo = CatalogRepository::new(CsvCatalog::new(&path));

    let first = repo.snapshot().unwrap();
    fs::write(&path, "name\nOnly Kit\n").unwrap();
    let cached = repo.snapshot().unwrap();
    assert!(Arc::ptr_eq(&first, &cached));
    assert_eq!(cached.len(), 2);

    repo.invalidate();
    let fresh = repo.snapshot().unwrap();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].name, "Only Kit");
    // Older readers keep their snapshot.
    assert_eq!(first.len(), 2);
}

#[test]
fn deleted_file_surfaces_on_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, INVENTORY);
    let repo = CatalogRepository::new(CsvCatalog::new(&path));
    repo.snapshot().unwrap();

    fs::remove_file(&path).unwrap();
    assert!(matches!(repo.reload(), Err(CatalogError::NotFound { .. })));
    assert_eq!(repo.snapshot().unwrap().len(), 2);
}

#[test]
fn recommendations_are_audited() {
    let dir = tempfile::tempdir().unwrap();
    let audit_path = dir.path().join("audit.jsonl");
    let recommender =
        Recommender::default().with_audit_sink(Box::new(JsonlAuditLog::new(&audit_path)));
    let kits = SeedCatalog.list_items().unwrap();

    let request = Request::text("vlog travel outdoor")
        .with_budget(300)
        .with_strategy(StrategyKind::Corpus);
    let recommendation = recommender.recommend(&request, &kits).unwrap();
    assert!(!recommendation.results.is_empty());

    let text = fs::read_to_string(&audit_path).unwrap();
    let entry: AuditEntry = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(entry.query, "vlog travel outdoor");
    assert_eq!(entry.budget, 300);
    assert_eq!(entry.strategy, "corpus");
    assert_eq!(entry.results.len(), recommendation.results.len());
    assert_eq!(entry.results[0].name, recommendation.results[0].name);
}

#[test]
fn broken_audit_log_does_not_fail_recommendation() {
    let dir = tempfile::tempdir().unwrap();
    let recommender = Recommender::default()
        .with_audit_sink(Box::new(JsonlAuditLog::new(dir.path().join("missing/a.jsonl"))));
    let kits = SeedCatalog.list_items().unwrap();
    let result = recommender.recommend(&Request::text("podcast studio"), &kits);
    assert!(result.is_ok());
}
