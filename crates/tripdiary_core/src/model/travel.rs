//! Travel entry domain model.
//!
//! # Responsibility
//! - Define the record shown as one row of the travel list.
//! - Provide validation shared by write and row-parse paths.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another travel.
//! - `end_date` must not be earlier than `start_date`.
//! - `title` must contain at least one non-whitespace character.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a travel entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TravelId = Uuid;

/// One travel record shown in the list.
///
/// Identity for list reconciliation is `uuid`; equality and hash cover every
/// displayed field so a field edit on an existing entry shows up as an
/// in-place update rather than nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TravelEntry {
    /// Stable global ID used for row identity, routing and auditing.
    pub uuid: TravelId,
    /// Display title of the travel.
    pub title: String,
    /// Travel start, unix epoch milliseconds.
    pub start_date: i64,
    /// Travel end, unix epoch milliseconds. Must be >= `start_date`.
    pub end_date: i64,
}

/// Validation failure for a travel entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelValidationError {
    /// Title is empty or whitespace-only.
    BlankTitle,
    /// `end_date` precedes `start_date`.
    ReversedDateRange { start_date: i64, end_date: i64 },
}

impl Display for TravelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "travel title must not be blank"),
            Self::ReversedDateRange {
                start_date,
                end_date,
            } => write!(
                f,
                "travel end_date {end_date} must not be earlier than start_date {start_date}"
            ),
        }
    }
}

impl Error for TravelValidationError {}

impl TravelEntry {
    /// Creates a new travel entry with a generated stable ID.
    pub fn new(title: impl Into<String>, start_date: i64, end_date: i64) -> Self {
        Self::with_id(Uuid::new_v4(), title, start_date, end_date)
    }

    /// Creates a travel entry with a caller-provided stable ID.
    ///
    /// Used by import/sync paths where identity already exists externally.
    /// Does not validate; call [`TravelEntry::validate`] before persisting.
    pub fn with_id(
        uuid: TravelId,
        title: impl Into<String>,
        start_date: i64,
        end_date: i64,
    ) -> Self {
        Self {
            uuid,
            title: title.into(),
            start_date,
            end_date,
        }
    }

    /// Checks the entry against domain invariants.
    ///
    /// # Errors
    /// - `BlankTitle` when the title has no visible characters.
    /// - `ReversedDateRange` when the date range is inverted.
    pub fn validate(&self) -> Result<(), TravelValidationError> {
        if self.title.trim().is_empty() {
            return Err(TravelValidationError::BlankTitle);
        }
        if self.end_date < self.start_date {
            return Err(TravelValidationError::ReversedDateRange {
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }
        Ok(())
    }
}
