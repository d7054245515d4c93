//! Domain model for travel-diary entries.
//!
//! # Responsibility
//! - Define the canonical travel record rendered by the list screen.
//! - Keep display identity/equality rules in one place.
//!
//! # Invariants
//! - Every travel entry is identified by a stable `TravelId`.
//! - Equality covers every displayed field, so any edit is a visible change.

pub mod travel;
