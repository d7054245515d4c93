//! Travel list view model.
//!
//! # Responsibility
//! - Act as single source of truth for the displayed travel sequence.
//! - Orchestrate paginated fetches and deletes against the repository.
//! - Notify the injected delegate of state changes, level-triggered.
//!
//! # Invariants
//! - `cursor` equals the count of rows fetched from the backing store.
//! - At most one pagination fetch is in flight; `begin_fetch` rejects a
//!   second request until the first completes.
//! - A failed fetch or delete leaves the sequence and cursor untouched.
//! - The sequence never contains two entries with the same id.

use crate::model::travel::{TravelEntry, TravelId};
use crate::repo::travel_repo::{RepoResult, TravelPageQuery, TravelRepository};
use log::{error, info, warn};

/// Rows requested per pagination fetch.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// State-change notifications exposed to the view layer.
///
/// All notifications are level-triggered: `on_data_changed` always carries
/// the full current sequence, and the view rebuilds its rendering from it
/// rather than from a diff computed here. Failure notifications report the
/// kind only; the underlying storage error is logged, never propagated.
pub trait TravelListDelegate {
    fn on_data_changed(&mut self, entries: &[TravelEntry]);
    fn on_placeholder_changed(&mut self, visible: bool);
    fn on_fetch_failed(&mut self);
    fn on_delete_failed(&mut self);
}

/// One accepted pagination request, handed out by [`TravelListViewModel::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

/// Single source of truth for the travel list screen.
///
/// The repository and delegate are injected at construction; nothing here
/// reaches shared global state. Fetch completion is split from fetch start
/// (`begin_fetch` / `complete_fetch`) so a shell that runs storage I/O off
/// the UI thread can drive the same state machine; [`fetch_next_page`]
/// composes both for synchronous callers.
///
/// [`fetch_next_page`]: TravelListViewModel::fetch_next_page
pub struct TravelListViewModel<R: TravelRepository, D: TravelListDelegate> {
    repo: R,
    delegate: D,
    entries: Vec<TravelEntry>,
    cursor: u32,
    fetch_in_flight: bool,
    page_size: u32,
}

impl<R: TravelRepository, D: TravelListDelegate> TravelListViewModel<R, D> {
    /// Creates a view model with the default page size.
    pub fn new(repo: R, delegate: D) -> Self {
        Self::with_page_size(repo, delegate, DEFAULT_PAGE_SIZE)
    }

    /// Creates a view model with an explicit page size (tests, tuning).
    pub fn with_page_size(repo: R, delegate: D, page_size: u32) -> Self {
        Self {
            repo,
            delegate,
            entries: Vec::new(),
            cursor: 0,
            fetch_in_flight: false,
            page_size: page_size.max(1),
        }
    }

    /// Current displayed sequence, in fetch order.
    pub fn entries(&self) -> &[TravelEntry] {
        &self.entries
    }

    /// Pagination cursor: rows fetched from the backing store so far.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Whether a pagination fetch is currently in flight.
    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    /// Read access to the injected delegate (the render state).
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the injected delegate.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Starts a pagination fetch.
    ///
    /// Returns the page request to run against the repository, or `None`
    /// when a fetch is already in flight. The caller must eventually pass
    /// the repository outcome to [`TravelListViewModel::complete_fetch`].
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.fetch_in_flight {
            info!("event=fetch_page module=list status=rejected reason=in_flight");
            return None;
        }

        self.fetch_in_flight = true;
        Some(PageRequest {
            offset: self.cursor,
            limit: self.page_size,
        })
    }

    /// Applies the outcome of a pagination fetch.
    ///
    /// Success appends the batch, advances the cursor by the batch size and
    /// signals data + placeholder changes; an empty batch is a tolerated
    /// no-op append and never schedules another fetch by itself. Failure
    /// mutates nothing and signals the failure kind only. A completion
    /// arriving with no fetch in flight is discarded.
    pub fn complete_fetch(&mut self, outcome: RepoResult<Vec<TravelEntry>>) {
        if !self.fetch_in_flight {
            warn!("event=fetch_page module=list status=discarded reason=no_fetch_in_flight");
            return;
        }
        self.fetch_in_flight = false;

        match outcome {
            Ok(batch) => {
                let batch_size = batch.len();
                self.cursor += batch_size as u32;
                for travel in batch {
                    if self.entries.iter().any(|entry| entry.uuid == travel.uuid) {
                        warn!(
                            "event=fetch_page module=list status=skipped_duplicate uuid={}",
                            travel.uuid
                        );
                        continue;
                    }
                    self.entries.push(travel);
                }
                info!(
                    "event=fetch_page module=list status=ok batch={} total={}",
                    batch_size,
                    self.entries.len()
                );
                self.notify_data_changed();
            }
            Err(err) => {
                error!("event=fetch_page module=list status=error error={err}");
                self.delegate.on_fetch_failed();
            }
        }
    }

    /// Fetches the next page synchronously.
    ///
    /// Returns `true` when a request was issued, `false` when it was
    /// rejected because a fetch is already in flight.
    pub fn fetch_next_page(&mut self) -> bool {
        let Some(request) = self.begin_fetch() else {
            return false;
        };

        let outcome = self.repo.fetch_page(&TravelPageQuery {
            offset: request.offset,
            limit: request.limit,
        });
        self.complete_fetch(outcome);
        true
    }

    /// Deletes one travel entry through the repository.
    ///
    /// The repository confirms first; the local row is only removed after a
    /// successful delete, so a failure leaves the row visibly intact. A
    /// removed row retreats the cursor by one to keep the offset aligned
    /// with the shrunk backing store.
    pub fn delete_entry(&mut self, id: TravelId) {
        match self.repo.delete_travel(id) {
            Ok(()) => {
                let before = self.entries.len();
                self.entries.retain(|entry| entry.uuid != id);
                let removed = before - self.entries.len();
                self.cursor = self.cursor.saturating_sub(removed as u32);
                info!(
                    "event=delete_travel module=list status=ok uuid={id} removed={removed} total={}",
                    self.entries.len()
                );
                self.notify_data_changed();
            }
            Err(err) => {
                error!("event=delete_travel module=list status=error uuid={id} error={err}");
                self.delegate.on_delete_failed();
            }
        }
    }

    /// Selection-time lookup of one entry in the backing store.
    pub fn lookup_entry(&self, id: TravelId) -> RepoResult<Option<TravelEntry>> {
        self.repo.get_travel(id)
    }

    fn notify_data_changed(&mut self) {
        self.delegate.on_data_changed(&self.entries);
        self.delegate.on_placeholder_changed(self.entries.is_empty());
    }
}
