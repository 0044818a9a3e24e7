//! Remote-first repository for vehicle records.
//!
//! Every operation attempts the remote API first. Writes never fail from
//! the caller's perspective when the remote is down: they degrade to the
//! local cache so inventory changes can always be recorded. Reads are
//! asymmetric by design: the full list falls back to the cache, the
//! filtered reads degrade to empty.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, warn};

use crate::api::CarsApi;
use crate::cache::CacheStore;
use crate::models::{Car, CarUpdate, Category, CreateCar};

pub struct CarService {
    api: Arc<dyn CarsApi>,
    store: CacheStore,
}

impl CarService {
    pub fn new(api: Arc<dyn CarsApi>, store: CacheStore) -> Self {
        Self { api, store }
    }

    /// List the full catalog. Remote result is returned verbatim and
    /// mirrored into the cache; when the remote is unreachable the
    /// persisted list (possibly empty) is served instead.
    pub async fn list_all(&self) -> Result<Vec<Car>> {
        match self.api.fetch_cars().await {
            Ok(cars) => {
                // The remote data is in hand; a failed mirror write must
                // not blank the catalog.
                if let Err(e) = self.store.save_all(&cars) {
                    warn!(error = %e, "Failed to mirror vehicle list into cache");
                }
                Ok(cars)
            }
            Err(e) => {
                warn!(error = %e, "Remote list failed, serving cached vehicle list");
                Ok(self.store.load())
            }
        }
    }

    /// Fetch a single record from the remote. No cache fallback here:
    /// a failure of any kind reads as "not found".
    pub async fn get_by_id(&self, id: &str) -> Option<Car> {
        match self.api.fetch_car(id).await {
            Ok(car) => Some(car),
            Err(e) => {
                warn!(id, error = %e, "Failed to fetch vehicle");
                None
            }
        }
    }

    /// Create a record. On remote success the returned record (with
    /// server-assigned id and timestamps) is appended to the cache. When
    /// the remote is unreachable a record is synthesized locally with a
    /// timestamp-derived id, so the operation still succeeds.
    pub async fn create(&self, data: CreateCar) -> Result<Car> {
        match self.api.create_car(&data).await {
            Ok(car) => {
                let mut cars = self.store.load();
                cars.push(car.clone());
                self.store.save_all(&cars)?;
                Ok(car)
            }
            Err(e) => {
                warn!(error = %e, "Remote create failed, persisting vehicle locally");
                let mut cars = self.store.load();
                let id = generate_local_id(&cars);
                let car = data.into_local_car(id);
                cars.push(car.clone());
                self.store.save_all(&cars)?;
                Ok(car)
            }
        }
    }

    /// Apply a partial update. The same shallow merge runs against the
    /// cache on both paths; on remote failure the merged cache entry is
    /// the result. `None` means no record with that id exists locally.
    pub async fn update(&self, update: CarUpdate) -> Result<Option<Car>> {
        match self.api.update_car(&update).await {
            Ok(car) => {
                self.merge_into_store(&update)?;
                Ok(Some(car))
            }
            Err(e) => {
                warn!(id = %update.id, error = %e, "Remote update failed, updating cache only");
                self.merge_into_store(&update)
            }
        }
    }

    /// Delete a record. On remote failure the id is removed from the
    /// cache anyway; success then means an entry was actually removed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        match self.api.delete_car(id).await {
            Ok(()) => {
                let mut cars = self.store.load();
                cars.retain(|car| car.id != id);
                self.store.save_all(&cars)?;
                Ok(true)
            }
            Err(e) => {
                warn!(id, error = %e, "Remote delete failed, removing from cache only");
                let mut cars = self.store.load();
                let before = cars.len();
                cars.retain(|car| car.id != id);
                if cars.len() == before {
                    return Ok(false);
                }
                self.store.save_all(&cars)?;
                Ok(true)
            }
        }
    }

    /// List vehicles in one category. Degrades to empty on failure, not
    /// to the cache (kept for compatibility with the original backend
    /// contract).
    pub async fn list_by_category(&self, category: Category) -> Vec<Car> {
        match self.api.fetch_cars_by_category(category).await {
            Ok(cars) => cars,
            Err(e) => {
                warn!(%category, error = %e, "Failed to fetch vehicles by category");
                Vec::new()
            }
        }
    }

    /// List vehicles currently available for rent. Degrades to empty on
    /// failure, same as `list_by_category`.
    pub async fn list_available(&self) -> Vec<Car> {
        match self.api.fetch_available_cars().await {
            Ok(cars) => cars,
            Err(e) => {
                warn!(error = %e, "Failed to fetch available vehicles");
                Vec::new()
            }
        }
    }

    fn merge_into_store(&self, update: &CarUpdate) -> Result<Option<Car>> {
        let mut cars = self.store.load();
        let Some(car) = cars.iter_mut().find(|car| car.id == update.id) else {
            debug!(id = %update.id, "No cached vehicle to merge update into");
            return Ok(None);
        };
        update.apply_to(car);
        let merged = car.clone();
        self.store.save_all(&cars)?;
        Ok(Some(merged))
    }
}

/// Derive a unique local id from the current time, bumping past any
/// collisions with ids already in the cache.
fn generate_local_id(cars: &[Car]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !cars.iter().any(|car| car.id == id) {
            return id;
        }
        candidate += 1;
    }
}
