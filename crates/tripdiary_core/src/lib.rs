//! Core domain logic for the TripDiary travel-list screen.
//! This crate is the single source of truth for list/pagination invariants.

pub mod db;
pub mod list;
pub mod logging;
pub mod model;
pub mod repo;

pub use list::controller::{TravelDetailRoute, TravelListController, PAGINATION_MIN_COUNT};
pub use list::reconcile::{apply_ops, reconcile, ListOp};
pub use list::screen::{ListAlert, ListNotice, TravelListScreen};
pub use list::view_model::{
    PageRequest, TravelListDelegate, TravelListViewModel, DEFAULT_PAGE_SIZE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::travel::{TravelEntry, TravelId, TravelValidationError};
pub use repo::travel_repo::{
    RepoError, RepoResult, SqliteTravelRepository, TravelPageQuery, TravelRepository,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
