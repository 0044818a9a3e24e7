//! Domain models for rental vehicles.
//!
//! These types mirror the remote API's JSON contract (camelCase fields)
//! and are also what the cache persists on disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel image used when a vehicle has no photo URL.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Vehicle category. The remote API stores these as display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "SUV")]
    Suv,
    Sedan,
    Hatchback,
    Luxury,
    Sports,
    Electric,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Suv => "SUV",
            Category::Sedan => "Sedan",
            Category::Hatchback => "Hatchback",
            Category::Luxury => "Luxury",
            Category::Sports => "Sports",
            Category::Electric => "Electric",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transmission type. The empty string on the wire means "not specified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
    #[serde(rename = "")]
    #[default]
    Unspecified,
}

/// Fuel type. The empty string on the wire means "not specified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fuel {
    Gasoline,
    Ethanol,
    Flex,
    Diesel,
    Electric,
    #[serde(rename = "")]
    #[default]
    Unspecified,
}

/// A rentable vehicle as known to the catalog.
///
/// `id` is opaque and unique: assigned by the remote store on creation, or
/// derived from a local timestamp when the record was created offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub name: String,
    #[serde(default = "default_image")]
    pub image: String,
    /// Rental price per day.
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub transmission: Transmission,
    #[serde(default)]
    pub fuel: Fuel,
    pub seats: u8,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Fields required to create a vehicle. The store (remote or local
/// fallback) assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCar {
    pub name: String,
    #[serde(default = "default_image")]
    pub image: String,
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub transmission: Transmission,
    #[serde(default)]
    pub fuel: Fuel,
    pub seats: u8,
    pub available: bool,
}

impl CreateCar {
    /// Build a locally persisted record with the given id, stamping both
    /// timestamps with the current time. Used on the offline create path.
    pub fn into_local_car(self, id: String) -> Car {
        let now = Utc::now();
        let image = if self.image.is_empty() {
            default_image()
        } else {
            self.image
        };
        Car {
            id,
            name: self.name,
            image,
            price: self.price,
            category: self.category,
            transmission: self.transmission,
            fuel: self.fuel,
            seats: self.seats,
            available: self.available,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// A partial update: `id` selects the record, every other field replaces
/// the stored value only when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<Transmission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<Fuel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl CarUpdate {
    /// Shallow-merge this update into `car` and refresh `updated_at`.
    /// Unset fields keep their previous values.
    pub fn apply_to(&self, car: &mut Car) {
        if let Some(ref name) = self.name {
            car.name = name.clone();
        }
        if let Some(ref image) = self.image {
            car.image = image.clone();
        }
        if let Some(price) = self.price {
            car.price = price;
        }
        if let Some(category) = self.category {
            car.category = category;
        }
        if let Some(transmission) = self.transmission {
            car.transmission = transmission;
        }
        if let Some(fuel) = self.fuel {
            car.fuel = fuel;
        }
        if let Some(seats) = self.seats {
            car.seats = seats;
        }
        if let Some(available) = self.available {
            car.available = available;
        }
        car.updated_at = Some(Utc::now());
    }
}
