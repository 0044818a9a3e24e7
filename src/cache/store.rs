use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::Car;

/// Default slot name for the persisted vehicle list.
pub const DEFAULT_SLOT: &str = "rental-cars";

/// On-disk store for the full vehicle list.
///
/// The whole collection lives in a single JSON file: callers read the
/// full list, mutate in memory, and write the full list back. There is
/// no partial-update primitive and no locking; one logical writer (the
/// repository) is assumed per session.
pub struct CacheStore {
    cache_dir: PathBuf,
    slot: String,
}

impl CacheStore {
    /// Create a store rooted at `cache_dir`. The slot name namespaces the
    /// file, so tests can run independent instances side by side.
    pub fn new(cache_dir: PathBuf, slot: impl Into<String>) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache directory: {}", cache_dir.display()))?;
        Ok(Self {
            cache_dir,
            slot: slot.into(),
        })
    }

    fn slot_path(&self) -> PathBuf {
        self.cache_dir.join(format!("{}.json", self.slot))
    }

    /// Load the persisted list. Missing or unparsable content is treated
    /// as absence, not an error, so a corrupt file degrades to an empty
    /// catalog instead of wedging the caller.
    pub fn load(&self) -> Vec<Car> {
        let path = self.slot_path();
        if !path.exists() {
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "Failed to read cache file");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(cars) => cars,
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "Cache file unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the persisted list wholesale.
    pub fn save_all(&self, cars: &[Car]) -> Result<()> {
        let path = self.slot_path();
        let contents = serde_json::to_string_pretty(cars)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write cache file: {}", path.display()))?;
        debug!(slot = %self.slot, count = cars.len(), "Saved vehicle list to cache");
        Ok(())
    }

    /// Remove the persisted list entirely.
    pub fn clear(&self) -> Result<()> {
        let path = self.slot_path();
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove cache file: {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Fuel, Transmission, PLACEHOLDER_IMAGE};

    fn car(id: &str, name: &str) -> Car {
        Car {
            id: id.to_string(),
            name: name.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            price: 100.0,
            category: Category::Sedan,
            transmission: Transmission::Manual,
            fuel: Fuel::Flex,
            seats: 5,
            available: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_load_empty_when_nothing_persisted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CacheStore::new(dir.path().to_path_buf(), DEFAULT_SLOT).expect("store");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CacheStore::new(dir.path().to_path_buf(), DEFAULT_SLOT).expect("store");

        let cars = vec![car("1", "Civic"), car("2", "Corolla")];
        store.save_all(&cars).expect("save");
        assert_eq!(store.load(), cars);
    }

    #[test]
    fn test_corrupt_content_treated_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CacheStore::new(dir.path().to_path_buf(), DEFAULT_SLOT).expect("store");

        std::fs::write(dir.path().join(format!("{}.json", DEFAULT_SLOT)), "{not json")
            .expect("write corrupt file");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_slots_are_independent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = CacheStore::new(dir.path().to_path_buf(), "slot-a").expect("store");
        let b = CacheStore::new(dir.path().to_path_buf(), "slot-b").expect("store");

        a.save_all(&[car("1", "Civic")]).expect("save");
        assert_eq!(a.load().len(), 1);
        assert!(b.load().is_empty());
    }

    #[test]
    fn test_clear_removes_slot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CacheStore::new(dir.path().to_path_buf(), DEFAULT_SLOT).expect("store");

        store.save_all(&[car("1", "Civic")]).expect("save");
        store.clear().expect("clear");
        assert!(store.load().is_empty());
    }
}
