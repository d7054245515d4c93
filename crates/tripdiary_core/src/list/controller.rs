//! Travel list controller: input side of the list screen.
//!
//! # Responsibility
//! - Translate shell events (appear, row render, swipe, select) into view
//!   model operations.
//! - Debounce the near-end pagination trigger.
//!
//! # Invariants
//! - Pagination triggers at most once per sequence length; the in-flight
//!   guard itself lives in the view model.
//! - Swipe delete never removes the row eagerly; the re-render comes from
//!   the data-changed notification after the repository confirms.

use crate::list::screen::{ListNotice, TravelListScreen};
use crate::list::view_model::TravelListViewModel;
use crate::model::travel::TravelEntry;
use crate::repo::travel_repo::TravelRepository;
use log::warn;

/// Minimum rendered row count before near-end pagination kicks in.
pub const PAGINATION_MIN_COUNT: usize = 10;

/// Navigation target produced by selecting a row: the detail/plan screen
/// scoped to one travel's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelDetailRoute {
    pub travel: TravelEntry,
}

/// Composes the view model with its render state and drives both from
/// shell input events.
pub struct TravelListController<R: TravelRepository> {
    view_model: TravelListViewModel<R, TravelListScreen>,
    last_pagination_len: Option<usize>,
}

impl<R: TravelRepository> TravelListController<R> {
    pub fn new(repo: R) -> Self {
        Self {
            view_model: TravelListViewModel::new(repo, TravelListScreen::new()),
            last_pagination_len: None,
        }
    }

    /// Render state for the shell to draw.
    pub fn screen(&self) -> &TravelListScreen {
        self.view_model.delegate()
    }

    /// Mutable render state (alert dismissal, notice consumption).
    pub fn screen_mut(&mut self) -> &mut TravelListScreen {
        self.view_model.delegate_mut()
    }

    /// Underlying view model, for shells driving fetches asynchronously.
    pub fn view_model_mut(&mut self) -> &mut TravelListViewModel<R, TravelListScreen> {
        &mut self.view_model
    }

    /// Screen-will-appear hook: issues the initial fetch.
    pub fn screen_will_appear(&mut self) {
        self.view_model.fetch_next_page();
    }

    /// Row-render hook: fires the near-end pagination trigger.
    ///
    /// Triggers only when the row is the last of the rendered sequence, the
    /// sequence holds at least [`PAGINATION_MIN_COUNT`] rows, no fetch is in
    /// flight, and no trigger has fired yet for this sequence length. A
    /// single scroll pass therefore issues at most one fetch.
    pub fn will_render_row(&mut self, index: usize) {
        let len = self.screen().rendered().len();
        if len < PAGINATION_MIN_COUNT || index + 1 != len {
            return;
        }
        if self.view_model.is_fetching() || self.last_pagination_len == Some(len) {
            return;
        }

        self.last_pagination_len = Some(len);
        self.view_model.fetch_next_page();
    }

    /// Swipe-to-delete hook for the row at `index`.
    ///
    /// Resolves the row identity and requests deletion; the rendered row
    /// stays put until the repository confirms. Out-of-range indices are
    /// ignored (the row disappeared under the gesture).
    pub fn swipe_delete_row(&mut self, index: usize) {
        let Some(id) = self.screen().rendered().get(index).map(|entry| entry.uuid) else {
            return;
        };
        let len_before = self.screen().rendered().len();
        self.view_model.delete_entry(id);
        // A successful delete changes the sequence length; reaching the last
        // row again after that is a fresh threshold crossing, not the one
        // already debounced.
        if self.screen().rendered().len() != len_before {
            self.last_pagination_len = None;
        }
    }

    /// Row-selection hook: resolves the backing record and routes to the
    /// detail screen.
    ///
    /// A record that cannot be resolved (deleted underneath, storage error)
    /// posts a non-blocking notice instead of a modal alert and yields no
    /// route.
    pub fn select_row(&mut self, index: usize) -> Option<TravelDetailRoute> {
        let id = self.screen().rendered().get(index)?.uuid;

        match self.view_model.lookup_entry(id) {
            Ok(Some(travel)) => Some(TravelDetailRoute { travel }),
            Ok(None) => {
                warn!("event=select_travel module=list status=missing uuid={id}");
                self.screen_mut().post_notice(ListNotice::EntryUnavailable);
                None
            }
            Err(err) => {
                warn!("event=select_travel module=list status=error uuid={id} error={err}");
                self.screen_mut().post_notice(ListNotice::EntryUnavailable);
                None
            }
        }
    }
}
