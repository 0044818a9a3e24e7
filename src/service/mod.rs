//! Catalog repository combining the remote API with the local cache.
//!
//! `CarService` is the single place fallback policy lives: every
//! operation goes remote-first, and on failure degrades to the on-disk
//! `CacheStore` so the admin keeps working offline.

pub mod cars;

pub use cars::CarService;
