//! Built-in demonstration catalog.

use kitmatch_engine::EquipmentKit;

use crate::{CatalogError, CatalogProvider, read_csv};

/// Bundled CSV data.
const SEED_CSV: &str = include_str!("../data/seed.csv");

/// Source name used in errors and logs.
const SEED_ORIGIN: &str = "<built-in seed>";

/// Provider for the small catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalog;

impl CatalogProvider for SeedCatalog {
    fn list_items(&self) -> Result<Vec<EquipmentKit>, CatalogError> {
        read_csv(SEED_CSV.as_bytes(), SEED_ORIGIN).map(|loaded| loaded.kits)
    }

    fn describe(&self) -> String {
        SEED_ORIGIN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use kitmatch_engine::{Band, CanonicalTag, Expertise};

    use super::*;

    #[test]
    fn seed_loads_every_row() {
        let loaded = read_csv(SEED_CSV.as_bytes(), SEED_ORIGIN).unwrap();
        assert_eq!(loaded.report.skipped, 0);
        assert_eq!(loaded.kits.len(), 5);
    }

    #[test]
    fn seed_rows_are_structured() {
        let kits = SeedCatalog.list_items().unwrap();
        let zv1 = kits.iter().find(|k| k.name == "Sony ZV-1").unwrap();
        assert!(zv1.has_environment(CanonicalTag::Outdoor));
        assert!(zv1.is_best_for(CanonicalTag::Vlog));
        assert_eq!(zv1.portability, Band::High);
        assert_eq!(zv1.experience, Expertise::Beginner);
        assert!(kits.iter().all(|k| k.price > 0 && k.rating > 0.0));
    }
}
