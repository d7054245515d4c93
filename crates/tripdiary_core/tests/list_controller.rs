//! Screen/controller contract tests: near-end pagination trigger, swipe
//! delete, placeholder, alerts and selection routing.

use std::cell::RefCell;
use std::rc::Rc;
use tripdiary_core::{
    ListAlert, ListNotice, RepoError, RepoResult, TravelEntry, TravelId, TravelListController,
    TravelPageQuery, TravelRepository,
};

#[derive(Default)]
struct FakeState {
    travels: Vec<TravelEntry>,
    fetch_calls: usize,
    fail_fetch: bool,
    fail_delete: bool,
    fail_get: bool,
}

#[derive(Clone, Default)]
struct FakeRepo {
    state: Rc<RefCell<FakeState>>,
}

impl FakeRepo {
    fn seed(&self, travels: Vec<TravelEntry>) {
        self.state.borrow_mut().travels = travels;
    }

    fn remove(&self, id: TravelId) {
        self.state
            .borrow_mut()
            .travels
            .retain(|travel| travel.uuid != id);
    }

    fn fetch_calls(&self) -> usize {
        self.state.borrow().fetch_calls
    }

    fn set_fail_fetch(&self, fail: bool) {
        self.state.borrow_mut().fail_fetch = fail;
    }

    fn set_fail_delete(&self, fail: bool) {
        self.state.borrow_mut().fail_delete = fail;
    }

    fn set_fail_get(&self, fail: bool) {
        self.state.borrow_mut().fail_get = fail;
    }
}

impl TravelRepository for FakeRepo {
    fn create_travel(&self, travel: &TravelEntry) -> RepoResult<TravelId> {
        self.state.borrow_mut().travels.push(travel.clone());
        Ok(travel.uuid)
    }

    fn get_travel(&self, id: TravelId) -> RepoResult<Option<TravelEntry>> {
        let state = self.state.borrow();
        if state.fail_get {
            return Err(RepoError::InvalidData("injected get failure".to_string()));
        }
        Ok(state
            .travels
            .iter()
            .find(|travel| travel.uuid == id)
            .cloned())
    }

    fn fetch_page(&self, query: &TravelPageQuery) -> RepoResult<Vec<TravelEntry>> {
        let mut state = self.state.borrow_mut();
        state.fetch_calls += 1;
        if state.fail_fetch {
            return Err(RepoError::InvalidData("injected fetch failure".to_string()));
        }
        Ok(state
            .travels
            .iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    fn delete_travel(&self, id: TravelId) -> RepoResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_delete {
            return Err(RepoError::InvalidData(
                "injected delete failure".to_string(),
            ));
        }
        let before = state.travels.len();
        state.travels.retain(|travel| travel.uuid != id);
        if state.travels.len() == before {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn trip(title: &str, start: i64) -> TravelEntry {
    TravelEntry::new(title, start, start + 100)
}

fn seeded(count: usize) -> Vec<TravelEntry> {
    (0..count)
        .map(|index| trip(&format!("trip {index}"), index as i64 * 1_000))
        .collect()
}

#[test]
fn screen_will_appear_fetches_first_page_and_hides_placeholder() {
    let repo = FakeRepo::default();
    repo.seed(seeded(4));
    let mut controller = TravelListController::new(repo.clone());

    assert!(controller.screen().placeholder_visible());
    controller.screen_will_appear();

    assert_eq!(repo.fetch_calls(), 1);
    assert_eq!(controller.screen().rendered().len(), 4);
    assert!(!controller.screen().placeholder_visible());
}

#[test]
fn empty_store_keeps_placeholder_visible() {
    let repo = FakeRepo::default();
    let mut controller = TravelListController::new(repo.clone());

    controller.screen_will_appear();

    assert!(controller.screen().rendered().is_empty());
    assert!(controller.screen().placeholder_visible());
    assert_eq!(repo.fetch_calls(), 1);
}

#[test]
fn near_end_trigger_fetches_once_per_sequence_length() {
    let repo = FakeRepo::default();
    repo.seed(seeded(25));
    let mut controller = TravelListController::new(repo.clone());

    controller.screen_will_appear();
    assert_eq!(controller.screen().rendered().len(), 10);

    controller.will_render_row(9);
    assert_eq!(repo.fetch_calls(), 2);
    assert_eq!(controller.screen().rendered().len(), 20);

    controller.will_render_row(19);
    assert_eq!(repo.fetch_calls(), 3);
    assert_eq!(controller.screen().rendered().len(), 25);

    // End of data: the trigger fires once for this length, the resulting
    // empty batch leaves the length unchanged and the trigger stays quiet.
    controller.will_render_row(24);
    assert_eq!(repo.fetch_calls(), 4);
    controller.will_render_row(24);
    controller.will_render_row(24);
    assert_eq!(repo.fetch_calls(), 4);
}

#[test]
fn near_end_trigger_fires_again_after_deletes_shrink_to_triggered_length() {
    let repo = FakeRepo::default();
    repo.seed(seeded(25));
    let mut controller = TravelListController::new(repo.clone());

    controller.screen_will_appear();
    controller.will_render_row(9);
    assert_eq!(controller.screen().rendered().len(), 20);
    assert_eq!(repo.fetch_calls(), 2);

    // Deletes shrink the rendered sequence back to a length the trigger has
    // already fired at; the cursor retreats with it, so the store still
    // holds unfetched rows past the new end.
    for _ in 0..10 {
        controller.swipe_delete_row(0);
    }
    assert_eq!(controller.screen().rendered().len(), 10);

    controller.will_render_row(9);
    assert_eq!(
        repo.fetch_calls(),
        3,
        "re-crossing the threshold after deletes must fetch"
    );
    assert_eq!(controller.screen().rendered().len(), 15);
}

#[test]
fn near_end_trigger_requires_minimum_row_count() {
    let repo = FakeRepo::default();
    repo.seed(seeded(5));
    let mut controller = TravelListController::new(repo.clone());

    controller.screen_will_appear();
    controller.will_render_row(4);

    assert_eq!(repo.fetch_calls(), 1, "short lists never paginate");
}

#[test]
fn non_terminal_rows_do_not_trigger_pagination() {
    let repo = FakeRepo::default();
    repo.seed(seeded(15));
    let mut controller = TravelListController::new(repo.clone());

    controller.screen_will_appear();
    controller.will_render_row(0);
    controller.will_render_row(5);
    controller.will_render_row(8);

    assert_eq!(repo.fetch_calls(), 1);
}

#[test]
fn fetch_failure_presents_dismissible_alert() {
    let repo = FakeRepo::default();
    repo.set_fail_fetch(true);
    let mut controller = TravelListController::new(repo);

    controller.screen_will_appear();

    assert_eq!(controller.screen().alert(), Some(ListAlert::FetchFailed));
    assert_eq!(ListAlert::FetchFailed.title(), "Load Failed");
    assert!(controller.screen().rendered().is_empty());

    controller.screen_mut().dismiss_alert();
    assert_eq!(controller.screen().alert(), None);
}

#[test]
fn swipe_delete_success_removes_row_via_notification() {
    let repo = FakeRepo::default();
    repo.seed(seeded(3));
    let mut controller = TravelListController::new(repo);

    controller.screen_will_appear();
    let removed = controller.screen().rendered()[1].clone();

    controller.swipe_delete_row(1);

    assert_eq!(controller.screen().rendered().len(), 2);
    assert!(controller
        .screen()
        .rendered()
        .iter()
        .all(|entry| entry.uuid != removed.uuid));
    assert_eq!(controller.screen().alert(), None);
}

#[test]
fn swipe_delete_failure_keeps_row_and_alerts() {
    let repo = FakeRepo::default();
    repo.seed(seeded(2));
    let mut controller = TravelListController::new(repo.clone());

    controller.screen_will_appear();
    repo.set_fail_delete(true);

    controller.swipe_delete_row(0);

    // No optimistic removal: the row is still rendered.
    assert_eq!(controller.screen().rendered().len(), 2);
    assert_eq!(controller.screen().alert(), Some(ListAlert::DeleteFailed));
}

#[test]
fn swipe_delete_out_of_range_is_ignored() {
    let repo = FakeRepo::default();
    repo.seed(seeded(2));
    let mut controller = TravelListController::new(repo);

    controller.screen_will_appear();
    controller.swipe_delete_row(9);

    assert_eq!(controller.screen().rendered().len(), 2);
    assert_eq!(controller.screen().alert(), None);
}

#[test]
fn select_row_routes_to_detail_scoped_to_identity() {
    let repo = FakeRepo::default();
    repo.seed(seeded(3));
    let mut controller = TravelListController::new(repo);

    controller.screen_will_appear();
    let selected = controller.screen().rendered()[2].clone();

    let route = controller.select_row(2).expect("route should resolve");
    assert_eq!(route.travel, selected);
}

#[test]
fn select_row_with_vanished_record_posts_notice_not_alert() {
    let repo = FakeRepo::default();
    repo.seed(seeded(3));
    let mut controller = TravelListController::new(repo.clone());

    controller.screen_will_appear();
    let selected = controller.screen().rendered()[0].clone();
    // Record vanishes behind the rendered list's back.
    repo.remove(selected.uuid);

    assert!(controller.select_row(0).is_none());
    assert_eq!(
        controller.screen_mut().take_notice(),
        Some(ListNotice::EntryUnavailable)
    );
    assert_eq!(controller.screen().alert(), None);
}

#[test]
fn select_row_with_storage_error_posts_notice() {
    let repo = FakeRepo::default();
    repo.seed(seeded(1));
    let mut controller = TravelListController::new(repo.clone());

    controller.screen_will_appear();
    repo.set_fail_get(true);

    assert!(controller.select_row(0).is_none());
    assert_eq!(
        controller.screen_mut().take_notice(),
        Some(ListNotice::EntryUnavailable)
    );
}

#[test]
fn render_ops_track_append_and_delete_passes() {
    let repo = FakeRepo::default();
    repo.seed(seeded(3));
    let mut controller = TravelListController::new(repo);

    controller.screen_will_appear();
    assert_eq!(controller.screen().last_render_ops().len(), 3);

    controller.swipe_delete_row(2);
    assert_eq!(controller.screen().last_render_ops().len(), 1);
}
