//! Travel repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the paginated fetch/delete contract the list screen depends on.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `TravelEntry::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `fetch_page` ordering is deterministic: `start_date ASC, uuid ASC`.

use crate::db::DbError;
use crate::model::travel::{TravelEntry, TravelId, TravelValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TRAVEL_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    start_date,
    end_date
FROM travels";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for travel persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TravelValidationError),
    Db(DbError),
    NotFound(TravelId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "travel not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted travel data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TravelValidationError> for RepoError {
    fn from(value: TravelValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// One page worth of the travel list, addressed by backing-store offset.
///
/// `offset` is the pagination cursor: the count of rows already fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelPageQuery {
    pub offset: u32,
    pub limit: u32,
}

/// Repository interface for the travel list screen.
///
/// The view model depends only on this contract; storage implementations are
/// injected, never reached through shared global state.
pub trait TravelRepository {
    fn create_travel(&self, travel: &TravelEntry) -> RepoResult<TravelId>;
    fn get_travel(&self, id: TravelId) -> RepoResult<Option<TravelEntry>>;
    fn fetch_page(&self, query: &TravelPageQuery) -> RepoResult<Vec<TravelEntry>>;
    fn delete_travel(&self, id: TravelId) -> RepoResult<()>;
}

/// SQLite-backed travel repository.
pub struct SqliteTravelRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTravelRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TravelRepository for SqliteTravelRepository<'_> {
    fn create_travel(&self, travel: &TravelEntry) -> RepoResult<TravelId> {
        travel.validate()?;

        self.conn.execute(
            "INSERT INTO travels (
                uuid,
                title,
                start_date,
                end_date
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                travel.uuid.to_string(),
                travel.title.as_str(),
                travel.start_date,
                travel.end_date,
            ],
        )?;

        Ok(travel.uuid)
    }

    fn get_travel(&self, id: TravelId) -> RepoResult<Option<TravelEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TRAVEL_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_travel_row(row)?));
        }

        Ok(None)
    }

    fn fetch_page(&self, query: &TravelPageQuery) -> RepoResult<Vec<TravelEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TRAVEL_SELECT_SQL}
             ORDER BY start_date ASC, uuid ASC
             LIMIT ?1 OFFSET ?2;"
        ))?;

        let mut rows = stmt.query(params![i64::from(query.limit), i64::from(query.offset)])?;
        let mut travels = Vec::new();

        while let Some(row) = rows.next()? {
            travels.push(parse_travel_row(row)?);
        }

        Ok(travels)
    }

    fn delete_travel(&self, id: TravelId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM travels WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_travel_row(row: &Row<'_>) -> RepoResult<TravelEntry> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in travels.uuid"))
    })?;

    let travel = TravelEntry {
        uuid,
        title: row.get("title")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
    };
    travel.validate()?;
    Ok(travel)
}
