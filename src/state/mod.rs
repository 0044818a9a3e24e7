//! In-memory state layer consumed by presentation code.
//!
//! `CarsController` owns the single in-memory copy of the vehicle list
//! for a session, together with the loading and error flags. It is the
//! only surface UI code should depend on.

pub mod controller;

pub use controller::CarsController;
