//! Headless render state for the travel list screen.
//!
//! # Responsibility
//! - Mirror the view model's notifications into renderable state: row
//!   sequence, reconcile ops, placeholder flag, alert and notice.
//! - Keep the screen independent of any concrete UI toolkit; the mobile
//!   shell reads this state and draws it.
//!
//! # Invariants
//! - `rendered` is only replaced through delegate notifications.
//! - Failure alerts are modal and dismissible; no automatic retry is
//!   offered, the user re-triggers by scrolling or swiping again.

use crate::list::reconcile::{reconcile, ListOp};
use crate::list::view_model::TravelListDelegate;
use crate::model::travel::TravelEntry;

/// Modal, dismissible failure alert raised by a list notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAlert {
    FetchFailed,
    DeleteFailed,
}

impl ListAlert {
    /// Alert title shown by the shell.
    pub fn title(&self) -> &'static str {
        match self {
            Self::FetchFailed => "Load Failed",
            Self::DeleteFailed => "Delete Failed",
        }
    }

    /// Alert body shown by the shell.
    pub fn message(&self) -> &'static str {
        match self {
            Self::FetchFailed => "Could not load your travels.",
            Self::DeleteFailed => "Could not delete the travel entry.",
        }
    }
}

/// Non-blocking notice (toast) that does not interrupt the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListNotice {
    /// The selected entry could not be resolved in the backing store.
    EntryUnavailable,
}

/// Render-facing state of the travel list screen.
///
/// Implements [`TravelListDelegate`], so the view model drives it directly.
/// Every data-changed notification runs a reconcile pass against the
/// previously rendered sequence; the resulting ops are kept for the shell
/// to replay onto its row widgets with scroll position preserved.
pub struct TravelListScreen {
    rendered: Vec<TravelEntry>,
    last_render_ops: Vec<ListOp>,
    placeholder_visible: bool,
    alert: Option<ListAlert>,
    notice: Option<ListNotice>,
}

impl TravelListScreen {
    pub fn new() -> Self {
        Self {
            rendered: Vec::new(),
            last_render_ops: Vec::new(),
            // Empty screen before the first fetch shows the placeholder.
            placeholder_visible: true,
            alert: None,
            notice: None,
        }
    }

    /// Currently rendered sequence, in list order.
    pub fn rendered(&self) -> &[TravelEntry] {
        &self.rendered
    }

    /// Operations of the most recent reconcile pass.
    pub fn last_render_ops(&self) -> &[ListOp] {
        &self.last_render_ops
    }

    /// Whether the empty-state placeholder is visible.
    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    /// Currently presented failure alert, if any.
    pub fn alert(&self) -> Option<ListAlert> {
        self.alert
    }

    /// Dismisses the presented alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Takes the pending non-blocking notice, if any.
    pub fn take_notice(&mut self) -> Option<ListNotice> {
        self.notice.take()
    }

    pub(crate) fn post_notice(&mut self, notice: ListNotice) {
        self.notice = Some(notice);
    }
}

impl Default for TravelListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TravelListDelegate for TravelListScreen {
    fn on_data_changed(&mut self, entries: &[TravelEntry]) {
        self.last_render_ops = reconcile(&self.rendered, entries, |entry| entry.uuid);
        self.rendered = entries.to_vec();
    }

    fn on_placeholder_changed(&mut self, visible: bool) {
        self.placeholder_visible = visible;
    }

    fn on_fetch_failed(&mut self) {
        self.alert = Some(ListAlert::FetchFailed);
    }

    fn on_delete_failed(&mut self) {
        self.alert = Some(ListAlert::DeleteFailed);
    }
}
