//! Local caching module for offline data access.
//!
//! This module provides the `CacheStore` for persisting the vehicle list
//! locally. The list is stored as one JSON document and read/written
//! wholesale; it is the fallback data source whenever the remote API is
//! unreachable.

pub mod store;

pub use store::CacheStore;
