//! Catalog providers and the cached repository in front of them.

use std::sync::Arc;

use kitmatch_engine::EquipmentKit;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::CatalogError;

/// A source of equipment kits.
pub trait CatalogProvider: Send + Sync {
    /// Lists every kit in the source.
    fn list_items(&self) -> Result<Vec<EquipmentKit>, CatalogError>;

    /// Short description of the source for logs and status output.
    fn describe(&self) -> String;
}

/// Shared, immutable catalog snapshot.
pub type Snapshot = Arc<[EquipmentKit]>;

/// Caches one snapshot of a provider's catalog.
///
/// The first `snapshot` call loads the provider; later calls return the same snapshot until
/// `invalidate` or `reload`. Readers holding an older snapshot keep it alive after a reload.
pub struct CatalogRepository<P> {
    /// Underlying source.
    provider: P,
    /// Cached snapshot, if loaded.
    cache: RwLock<Option<Snapshot>>,
}

impl<P: CatalogProvider> CatalogRepository<P> {
    /// Wraps a provider; nothing is loaded until the first snapshot.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: RwLock::new(None),
        }
    }

    /// Returns the provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the cached snapshot, loading it on first use.
    pub fn snapshot(&self) -> Result<Snapshot, CatalogError> {
        if let Some(snapshot) = self.cache.read().as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let mut cache = self.cache.write();
        // Another caller may have loaded while we waited for the lock.
        if let Some(snapshot) = cache.as_ref() {
            return Ok(Arc::clone(snapshot));
        }
        let snapshot = self.load()?;
        *cache = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drops the cached snapshot so the next call reloads.
    pub fn invalidate(&self) {
        if self.cache.write().take().is_some() {
            debug!(source = %self.provider.describe(), "catalog cache invalidated");
        }
    }

    /// Loads a fresh snapshot and replaces the cache. On failure the old snapshot stays.
    pub fn reload(&self) -> Result<Snapshot, CatalogError> {
        let snapshot = self.load()?;
        *self.cache.write() = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Reads the provider.
    fn load(&self) -> Result<Snapshot, CatalogError> {
        let kits = self.provider.list_items()?;
        info!(source = %self.provider.describe(), kits = kits.len(), "catalog loaded");
        Ok(kits.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::*;

    /// Provider that counts loads and can be switched to fail.
    #[derive(Default)]
    struct Counting {
        /// Completed loads.
        loads: AtomicUsize,
        /// When set, loads fail.
        fail: AtomicBool,
    }

    impl CatalogProvider for Counting {
        fn list_items(&self) -> Result<Vec<EquipmentKit>, CatalogError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(CatalogError::Empty {
                    origin: "counting".into(),
                });
            }
            let n = self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(vec![EquipmentKit::new(format!("kit {n}"))])
        }

        fn describe(&self) -> String {
            "counting".into()
        }
    }

    #[test]
    fn snapshot_is_cached() {
        let repo = CatalogRepository::new(Counting::default());
        let first = repo.snapshot().unwrap();
        let second = repo.snapshot().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(repo.provider().loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn invalidate_forces_reload() {
        let repo = CatalogRepository::new(Counting::default());
        let first = repo.snapshot().unwrap();
        repo.invalidate();
        let second = repo.snapshot().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first[0].name, "kit 0");
        assert_eq!(second[0].name, "kit 1");
    }

    #[test]
    fn failed_reload_keeps_old_snapshot() {
        let repo = CatalogRepository::new(Counting::default());
        let first = repo.snapshot().unwrap();
        repo.provider().fail.store(true, Ordering::SeqCst);
        assert!(repo.reload().is_err());
        assert!(Arc::ptr_eq(&first, &repo.snapshot().unwrap()));
    }

    #[test]
    fn load_error_is_not_cached() {
        let repo = CatalogRepository::new(Counting::default());
        repo.provider().fail.store(true, Ordering::SeqCst);
        assert!(repo.snapshot().is_err());
        repo.provider().fail.store(false, Ordering::SeqCst);
        assert_eq!(repo.snapshot().unwrap().len(), 1);
    }
}
