//! Travel list screen core: view model, reconciliation and render state.
//!
//! # Responsibility
//! - Own the displayed travel sequence and its pagination state machine.
//! - Convert sequence changes into minimal render operations.
//! - Model the screen-level contract (placeholder, alerts, near-end trigger).
//!
//! # Invariants
//! - The view model is the single mutator of the displayed sequence.
//! - At most one pagination fetch is in flight at a time.
//! - Failure notifications carry the failure kind only, never storage details.

pub mod controller;
pub mod reconcile;
pub mod screen;
pub mod view_model;
