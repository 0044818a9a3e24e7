//! fleetcache-core - offline-first data layer for a car-rental catalog.
//!
//! The authoritative store is a remote REST `/cars` collection; a local
//! JSON cache serves as the fallback whenever the remote is unreachable,
//! so the admin can keep recording inventory changes offline.
//!
//! Layering, bottom up:
//!
//! - [`cache::CacheStore`]: the persisted vehicle list (one JSON slot)
//! - [`api::ApiClient`]: the authenticated HTTP client (`CarsApi` seam)
//! - [`service::CarService`]: remote-first repository with cache fallback
//! - [`state::CarsController`]: in-memory list/loading/error state for UI
//!
//! Presentation concerns (forms, pages, routing, notifications) live
//! outside this crate and consume only the `CarsController` surface.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod models;
pub mod service;
pub mod state;

pub use api::{ApiClient, ApiError, CarsApi};
pub use auth::Session;
pub use cache::CacheStore;
pub use config::Config;
pub use models::{Car, CarUpdate, Category, CreateCar, Fuel, Transmission};
pub use service::CarService;
pub use state::CarsController;
