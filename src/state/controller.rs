//! View-model state for the vehicle catalog.
//!
//! Wraps `CarService` with the list/loading/error state triple the UI
//! reads, patching the in-memory list optimistically from each
//! operation's result instead of re-fetching.

use tracing::debug;

use crate::models::{Car, CarUpdate, Category, CreateCar};
use crate::service::CarService;

/// Session-scoped catalog state.
///
/// Mutating operations take `&mut self`, so two operations cannot
/// overlap on one controller. `loading` is a plain flag, not a counter:
/// callers sharing a controller across tasks must serialize their own
/// mutations (e.g. disable the submit control while it is set).
pub struct CarsController {
    service: CarService,
    /// The authoritative in-memory list for this session.
    pub cars: Vec<Car>,
    /// True exactly while one service call is in flight.
    pub loading: bool,
    /// Last failure message; cleared at the start of the next operation.
    pub error: Option<String>,
}

impl CarsController {
    /// Construct the controller and immediately load the catalog.
    pub async fn new(service: CarService) -> Self {
        let mut controller = Self {
            service,
            cars: Vec::new(),
            loading: false,
            error: None,
        };
        controller.refresh().await;
        controller
    }

    /// Re-fetch the full list and replace the in-memory copy.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;

        match self.service.list_all().await {
            Ok(cars) => {
                debug!(count = cars.len(), "Catalog loaded");
                self.cars = cars;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    /// Create a vehicle and append the resulting record. Returns `None`
    /// only when the operation failed outright (error field set); offline
    /// creation still succeeds with a locally persisted record.
    pub async fn add_car(&mut self, data: CreateCar) -> Option<Car> {
        self.loading = true;
        self.error = None;

        let result = match self.service.create(data).await {
            Ok(car) => {
                self.cars.push(car.clone());
                Some(car)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        };

        self.loading = false;
        result
    }

    /// Apply a partial update, replacing the matching in-memory record
    /// with the result. `None` means the id was unknown (or the
    /// operation failed); the error field says which.
    pub async fn update_car(&mut self, update: CarUpdate) -> Option<Car> {
        self.loading = true;
        self.error = None;

        let result = match self.service.update(update).await {
            Ok(Some(car)) => {
                if let Some(existing) = self.cars.iter_mut().find(|c| c.id == car.id) {
                    *existing = car.clone();
                }
                Some(car)
            }
            Ok(None) => {
                self.error = Some("Car not found".to_string());
                None
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        };

        self.loading = false;
        result
    }

    /// Delete a vehicle, removing it from the in-memory list only when
    /// the service reported success. The caller must check the flag.
    pub async fn delete_car(&mut self, id: &str) -> bool {
        self.loading = true;
        self.error = None;

        let removed = match self.service.delete(id).await {
            Ok(true) => {
                self.cars.retain(|car| car.id != id);
                true
            }
            Ok(false) => false,
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        };

        self.loading = false;
        removed
    }

    // ===== Derived accessors: pure filters over the in-memory list, =====
    // ===== never touching the network or the cache.                 =====

    pub fn get_by_id(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn cars_by_category(&self, category: Category) -> Vec<&Car> {
        self.cars
            .iter()
            .filter(|car| car.category == category)
            .collect()
    }

    pub fn available_cars(&self) -> Vec<&Car> {
        self.cars.iter().filter(|car| car.available).collect()
    }
}
