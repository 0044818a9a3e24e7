//! In-memory `CarsApi` implementation for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::models::{Car, CarUpdate, Category, CreateCar, Fuel, Transmission, PLACEHOLDER_IMAGE};

use super::CarsApi;

/// Stand-in for the remote API with a per-instance call counter and a
/// switch to simulate the server being unreachable.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub cars: Mutex<Vec<Car>>,
    offline: AtomicBool,
    next_id: AtomicUsize,
    calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars: Mutex::new(cars),
            next_id: AtomicUsize::new(1),
            ..Default::default()
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Total round trips attempted, reachable or not.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check_reachable(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            Err(anyhow!("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CarsApi for FakeApi {
    async fn fetch_cars(&self) -> Result<Vec<Car>> {
        self.check_reachable()?;
        Ok(self.cars.lock().unwrap().clone())
    }

    async fn fetch_car(&self, id: &str) -> Result<Car> {
        self.check_reachable()?;
        self.cars
            .lock()
            .unwrap()
            .iter()
            .find(|car| car.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("not found"))
    }

    async fn fetch_cars_by_category(&self, category: Category) -> Result<Vec<Car>> {
        self.check_reachable()?;
        Ok(self
            .cars
            .lock()
            .unwrap()
            .iter()
            .filter(|car| car.category == category)
            .cloned()
            .collect())
    }

    async fn fetch_available_cars(&self) -> Result<Vec<Car>> {
        self.check_reachable()?;
        Ok(self
            .cars
            .lock()
            .unwrap()
            .iter()
            .filter(|car| car.available)
            .cloned()
            .collect())
    }

    async fn create_car(&self, data: &CreateCar) -> Result<Car> {
        self.check_reachable()?;
        let id = format!("srv-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let car = data.clone().into_local_car(id);
        self.cars.lock().unwrap().push(car.clone());
        Ok(car)
    }

    async fn update_car(&self, update: &CarUpdate) -> Result<Car> {
        self.check_reachable()?;
        let mut cars = self.cars.lock().unwrap();
        let car = cars
            .iter_mut()
            .find(|car| car.id == update.id)
            .ok_or_else(|| anyhow!("not found"))?;
        update.apply_to(car);
        Ok(car.clone())
    }

    async fn delete_car(&self, id: &str) -> Result<()> {
        self.check_reachable()?;
        let mut cars = self.cars.lock().unwrap();
        let before = cars.len();
        cars.retain(|car| car.id != id);
        if cars.len() == before {
            return Err(anyhow!("not found"));
        }
        Ok(())
    }
}

pub(crate) fn car(id: &str, name: &str, category: Category, available: bool) -> Car {
    Car {
        id: id.to_string(),
        name: name.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        price: 100.0,
        category,
        transmission: Transmission::Automatic,
        fuel: Fuel::Gasoline,
        seats: 5,
        available,
        created_at: None,
        updated_at: None,
    }
}

pub(crate) fn create_data(name: &str) -> CreateCar {
    CreateCar {
        name: name.to_string(),
        image: String::new(),
        price: 100.0,
        category: Category::Suv,
        transmission: Transmission::Automatic,
        fuel: Fuel::Gasoline,
        seats: 4,
        available: true,
    }
}
