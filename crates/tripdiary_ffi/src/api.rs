//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for the list-screen UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures come back as envelope messages, never as thrown errors.

use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;
use tripdiary_core::db::open_db;
use tripdiary_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    SqliteTravelRepository, TravelEntry, TravelPageQuery, TravelRepository,
};
use uuid::Uuid;

const PAGE_DEFAULT_LIMIT: u32 = 10;
const PAGE_LIMIT_MAX: u32 = 10;
const TRAVEL_DB_FILE_NAME: &str = "tripdiary_travel.sqlite3";
static TRAVEL_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One travel row in the list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelListItem {
    /// Stable travel ID in string form.
    pub uuid: String,
    /// Display title.
    pub title: String,
    /// Travel start, epoch milliseconds.
    pub start_date: i64,
    /// Travel end, epoch milliseconds.
    pub end_date: i64,
}

/// Page response envelope for the travel list flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelPageResponse {
    /// Fetched rows in list order (empty past the end of data).
    pub items: Vec<TravelListItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
    /// Effective applied page limit.
    pub applied_limit: u32,
}

/// Generic action response envelope for travel commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Optional affected travel ID.
    pub travel_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TravelActionResponse {
    fn success(message: impl Into<String>, travel_id: String) -> Self {
        Self {
            ok: true,
            travel_id: Some(travel_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            travel_id: None,
            message: message.into(),
        }
    }
}

/// Fetches one page of the travel list at the given cursor offset.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - An offset past the end of data yields an empty page, not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn travel_fetch_page(offset: u32, limit: Option<u32>) -> TravelPageResponse {
    let applied_limit = normalize_page_limit(limit);
    let db_path = resolve_travel_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            return TravelPageResponse {
                items: Vec::new(),
                message: format!("travel_fetch_page failed: {err}"),
                applied_limit,
            };
        }
    };

    let repo = SqliteTravelRepository::new(&conn);
    match repo.fetch_page(&TravelPageQuery {
        offset,
        limit: applied_limit,
    }) {
        Ok(travels) => {
            let items = travels.into_iter().map(to_travel_list_item).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No more travels.".to_string()
            } else {
                format!("Fetched {} travel(s).", items.len())
            };
            TravelPageResponse {
                items,
                message,
                applied_limit,
            }
        }
        Err(err) => {
            warn!("event=travel_fetch_page module=ffi status=error error={err}");
            TravelPageResponse {
                items: Vec::new(),
                message: format!("travel_fetch_page failed: {err}"),
                applied_limit,
            }
        }
    }
}

/// Creates a travel entry from the add-travel flow.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Validation failures (blank title, reversed range) come back as failure
///   envelopes.
#[flutter_rust_bridge::frb(sync)]
pub fn travel_create(
    title: String,
    start_epoch_ms: i64,
    end_epoch_ms: i64,
) -> TravelActionResponse {
    let travel = TravelEntry::new(title.trim().to_string(), start_epoch_ms, end_epoch_ms);
    match with_travel_repo(|repo| repo.create_travel(&travel)) {
        Ok(travel_id) => TravelActionResponse::success("Travel created.", travel_id.to_string()),
        Err(err) => TravelActionResponse::failure(format!("travel_create failed: {err}")),
    }
}

/// Deletes a travel entry by its stable ID (swipe-to-delete flow).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Unknown IDs report the repository's not-found response as a failure
///   envelope, never a fabricated success.
#[flutter_rust_bridge::frb(sync)]
pub fn travel_delete(uuid: String) -> TravelActionResponse {
    let id = match Uuid::parse_str(uuid.trim()) {
        Ok(id) => id,
        Err(err) => {
            warn!("event=travel_delete module=ffi status=rejected reason=invalid_uuid");
            return TravelActionResponse::failure(format!(
                "travel_delete failed: invalid uuid `{uuid}`: {err}"
            ));
        }
    };

    let db_path = resolve_travel_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            return TravelActionResponse::failure(format!("travel DB open failed: {err}"));
        }
    };

    let repo = SqliteTravelRepository::new(&conn);
    match repo.delete_travel(id) {
        Ok(()) => TravelActionResponse::success("Travel deleted.", id.to_string()),
        Err(err) => TravelActionResponse::failure(format!("travel_delete failed: {err}")),
    }
}

fn normalize_page_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) => PAGE_DEFAULT_LIMIT,
        Some(value) if value > PAGE_LIMIT_MAX => PAGE_LIMIT_MAX,
        Some(value) => value,
        None => PAGE_DEFAULT_LIMIT,
    }
}

fn resolve_travel_db_path() -> PathBuf {
    TRAVEL_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TRIPDIARY_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(TRAVEL_DB_FILE_NAME)
        })
        .clone()
}

fn with_travel_repo(
    f: impl FnOnce(&SqliteTravelRepository<'_>) -> tripdiary_core::RepoResult<tripdiary_core::TravelId>,
) -> Result<tripdiary_core::TravelId, String> {
    let db_path = resolve_travel_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("travel DB open failed: {err}"))?;
    let repo = SqliteTravelRepository::new(&conn);
    f(&repo).map_err(|err| err.to_string())
}

fn to_travel_list_item(travel: TravelEntry) -> TravelListItem {
    TravelListItem {
        uuid: travel.uuid.to_string(),
        title: travel.title,
        start_date: travel.start_date,
        end_date: travel.end_date,
    }
}
