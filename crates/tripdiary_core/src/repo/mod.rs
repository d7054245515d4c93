//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract consumed by the list view model.
//! - Isolate SQLite query details from list/screen orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `TravelEntry::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod travel_repo;
