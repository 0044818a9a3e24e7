//! REST API client module for the rental catalog backend.
//!
//! This module provides the `ApiClient` for communicating with the
//! authoritative `/cars` collection endpoint, and the `CarsApi` trait
//! that decouples the repository from the transport so tests can swap in
//! an in-memory implementation.
//!
//! The API uses bearer token authentication; a 401 response invalidates
//! the stored session token before the error propagates.

pub mod client;
pub mod error;
#[cfg(test)]
pub(crate) mod testing;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Car, CarUpdate, Category, CreateCar};

pub use client::ApiClient;
pub use error::ApiError;

/// Remote operations on the `/cars` collection.
///
/// Mirrors the REST contract one method per round trip. The repository
/// treats any error from these methods as "remote unreachable" and falls
/// back to the local store; callers that care can downcast to `ApiError`.
#[async_trait]
pub trait CarsApi: Send + Sync {
    /// `GET /cars`
    async fn fetch_cars(&self) -> Result<Vec<Car>>;

    /// `GET /cars/{id}`
    async fn fetch_car(&self, id: &str) -> Result<Car>;

    /// `GET /cars?category={category}`
    async fn fetch_cars_by_category(&self, category: Category) -> Result<Vec<Car>>;

    /// `GET /cars?available=true`
    async fn fetch_available_cars(&self) -> Result<Vec<Car>>;

    /// `POST /cars` - the server assigns id and timestamps
    async fn create_car(&self, data: &CreateCar) -> Result<Car>;

    /// `PUT /cars/{id}`
    async fn update_car(&self, update: &CarUpdate) -> Result<Car>;

    /// `DELETE /cars/{id}`
    async fn delete_car(&self, id: &str) -> Result<()>;
}
