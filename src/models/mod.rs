//! Data models for the rental catalog.
//!
//! This module contains the structures used to represent catalog data:
//!
//! - `Car`: a rentable vehicle record
//! - `CreateCar`, `CarUpdate`: creation and partial-update payloads
//! - `Category`, `Transmission`, `Fuel`: enumerated vehicle attributes

pub mod car;

pub use car::{Car, CarUpdate, Category, CreateCar, Fuel, Transmission, PLACEHOLDER_IMAGE};
