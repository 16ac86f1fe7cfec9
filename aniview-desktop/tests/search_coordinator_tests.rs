//! Scenario tests for the search coordinator: ordering, racing, and
//! navigation rules, driven through the pure state transitions.

use std::time::Duration;

use aniview_desktop::domains::search::pagination::page_controls;
use aniview_desktop::domains::search::{
    Debouncer, SearchFailure, SearchState, Status,
};
use aniview_model::{
    Anime, Genre, Pagination, SearchCriteria, SearchResponse,
};

fn page_of(ids: &[u32], has_next_page: bool) -> SearchResponse {
    SearchResponse {
        data: ids
            .iter()
            .map(|id| Anime {
                mal_id: *id,
                title: format!("anime-{id}"),
                images: Default::default(),
                synopsis: None,
            })
            .collect(),
        pagination: Pagination {
            last_visible_page: None,
            has_next_page,
        },
    }
}

fn criteria(text: &str) -> SearchCriteria {
    SearchCriteria {
        text: text.to_string(),
        ..SearchCriteria::default()
    }
}

#[test]
fn empty_query_is_submitted_like_any_other() {
    let mut state = SearchState::default();
    assert_eq!(state.status, Status::Idle);

    let generation = state
        .submit()
        .expect("the default empty-text request must be issued");
    assert_eq!(state.status, Status::Loading);

    assert!(state.apply_results(generation, page_of(&[1, 2, 3], true)));
    assert_eq!(state.status, Status::Success);
    assert_eq!(state.results.len(), 3);
    assert!(state.has_next_page);
}

#[test]
fn duplicate_submit_while_in_flight_is_a_no_op() {
    let mut state = SearchState::default();
    state.submit().expect("first submit issues a call");
    assert_eq!(state.submit(), None);
    assert_eq!(state.submit(), None);
}

#[test]
fn duplicate_submit_after_success_is_a_no_op() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    state.apply_results(generation, page_of(&[1], false));

    // Overlapping reactive triggers re-submit the identical request.
    assert_eq!(state.submit(), None);
    assert_eq!(state.status, Status::Success);
}

#[test]
fn last_issued_request_wins_regardless_of_arrival_order() {
    let mut state = SearchState::default();
    let slow = state.submit().unwrap();

    // The user refines the search before the first response arrives.
    let fast = state
        .set_criteria(criteria("trigun"))
        .expect("changed criteria issue a new call");

    // The newer request's response arrives first and is applied.
    assert!(state.apply_results(fast, page_of(&[2], false)));
    assert_eq!(state.status, Status::Success);

    // The superseded response straggles in afterwards and is discarded.
    assert!(!state.apply_results(slow, page_of(&[1], true)));
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].mal_id, 2);
    assert!(!state.has_next_page);
}

#[test]
fn stale_failure_is_discarded_too() {
    let mut state = SearchState::default();
    let slow = state.submit().unwrap();
    let fast = state.set_criteria(criteria("akira")).unwrap();

    assert!(state.apply_results(fast, page_of(&[7], false)));
    assert!(!state.apply_failure(slow, SearchFailure::Transport));
    assert_eq!(state.status, Status::Success);
    assert!(state.error_message().is_none());
}

#[test]
fn criteria_change_resets_page_to_one() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    state.apply_results(generation, page_of(&[1], true));

    let generation = state.set_page(2).unwrap();
    state.apply_results(generation, page_of(&[2], true));
    assert_eq!(state.page, 2);

    let mut refined = state.criteria.clone();
    refined.genre = Some(Genre::Action);
    state
        .set_criteria(refined)
        .expect("a genre change issues a new call");
    assert_eq!(state.page, 1);
    assert_eq!(state.request().page, 1);
}

#[test]
fn unchanged_criteria_do_not_reset_or_resubmit() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    state.apply_results(generation, page_of(&[1], true));
    let generation = state.set_page(2).unwrap();
    state.apply_results(generation, page_of(&[2], true));

    // The debounce settling on identical text must not touch the page.
    assert_eq!(state.set_criteria(state.criteria.clone()), None);
    assert_eq!(state.page, 2);
}

#[test]
fn page_navigation_is_guarded() {
    let mut state = SearchState::default();

    // Below page 1, and forward before the server reported a next page.
    assert_eq!(state.set_page(0), None);
    assert_eq!(state.set_page(2), None);

    let generation = state.submit().unwrap();
    state.apply_results(generation, page_of(&[1], true));

    let generation = state.set_page(2).expect("next page is available");
    state.apply_results(generation, page_of(&[2], false));

    // The server reported no further page.
    assert_eq!(state.set_page(3), None);
    assert_eq!(state.page, 2);

    // Going back is always allowed above page 1.
    assert!(state.set_page(1).is_some());
}

#[test]
fn page_change_replaces_results_wholesale() {
    let mut state = SearchState::default();
    let generation = state
        .set_criteria(criteria("naruto"))
        .expect("new criteria issue a call");
    assert_eq!(state.submit(), None, "set_criteria already issued the call");

    let first_page: Vec<u32> = (1..=20).collect();
    assert!(state.apply_results(generation, page_of(&first_page, true)));
    assert_eq!(state.results.len(), 20);

    let generation = state.set_page(2).expect("page 2 is available");
    assert_eq!(state.request().criteria.text, "naruto");
    assert_eq!(state.request().page, 2);

    let second_page: Vec<u32> = (21..=40).collect();
    assert!(state.apply_results(generation, page_of(&second_page, true)));
    assert_eq!(state.results.len(), 20);
    assert!(state.results.iter().all(|anime| anime.mal_id > 20));
}

#[test]
fn rate_limit_and_generic_failures_are_distinct() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    assert!(state.apply_failure(generation, SearchFailure::RateLimited));
    assert_eq!(state.status, Status::Error);
    let rate_message = state.error_message().unwrap();

    // Explicit retry re-issues the identical request.
    let generation = state
        .submit()
        .expect("retry after a failure issues a new call");
    assert_eq!(state.status, Status::Loading);
    assert!(state.error_message().is_none());

    assert!(state.apply_failure(generation, SearchFailure::Transport));
    let generic_message = state.error_message().unwrap();
    assert_ne!(rate_message, generic_message);
}

#[test]
fn failure_preserves_previous_results() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    state.apply_results(generation, page_of(&[1, 2, 3], true));

    let generation = state.set_page(2).unwrap();
    assert!(state.apply_failure(generation, SearchFailure::Transport));
    assert_eq!(state.status, Status::Error);
    assert_eq!(state.results.len(), 3, "stale-but-valid data stays visible");
}

#[test]
fn cancel_restores_the_previous_terminal_status() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    state.apply_results(generation, page_of(&[1], true));

    let generation = state.set_page(2).unwrap();
    state.cancel();
    assert_eq!(state.status, Status::Success, "cancellation is not an error");
    assert!(state.error_message().is_none());

    // Even a transport that ignored the abort cannot apply the response.
    assert!(!state.apply_results(generation, page_of(&[9], false)));
    assert_eq!(state.results[0].mal_id, 1);
}

#[test]
fn cancel_before_any_success_returns_to_idle() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    state.cancel();
    assert_eq!(state.status, Status::Idle);
    assert!(!state.apply_failure(generation, SearchFailure::Transport));
}

#[test]
fn cancel_without_an_in_flight_call_is_inert() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    state.apply_results(generation, page_of(&[1], false));

    state.cancel();
    assert_eq!(state.status, Status::Success);
    assert_eq!(state.results.len(), 1);
}

#[test]
fn generations_are_monotonic() {
    let mut state = SearchState::default();
    let first = state.submit().unwrap();
    let second = state.set_criteria(criteria("lain")).unwrap();
    assert!(second > first);

    state.cancel();
    assert!(
        state.generation() > second,
        "cancellation invalidates the in-flight generation"
    );
}

#[test]
fn cancel_restores_a_prior_error_state_intact() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    state.apply_failure(generation, SearchFailure::RateLimited);
    let message = state.error_message().unwrap();

    // A new request goes out, then the view is torn down before it lands.
    state.set_criteria(criteria("gits")).unwrap();
    assert!(state.error_message().is_none());
    state.cancel();

    assert_eq!(state.status, Status::Error);
    assert_eq!(state.error_message(), Some(message));
}

#[test]
fn pagination_controls_follow_the_coordinator() {
    let mut state = SearchState::default();
    let generation = state.submit().unwrap();
    state.apply_results(generation, page_of(&[1], true));

    let controls = page_controls(&state);
    assert_eq!(controls.page, 1);
    assert!(!controls.can_go_prev);
    assert!(controls.can_go_next);

    let generation = state.set_page(2).unwrap();
    state.apply_results(generation, page_of(&[2], false));

    let controls = page_controls(&state);
    assert_eq!(controls.page, 2);
    assert!(controls.can_go_prev);
    assert!(!controls.can_go_next);
}

#[test]
fn only_the_final_edit_in_a_burst_commits() {
    // Three keystrokes inside one window: the first two timers are stale
    // by the time they would fire, so exactly one request goes out.
    let mut debouncer = Debouncer::new(Duration::from_millis(250));
    let mut state = SearchState::default();

    let first = debouncer.restart();
    let second = debouncer.restart();
    let third = debouncer.restart();

    let mut submissions = 0;
    for (token, text) in [(first, "c"), (second, "co"), (third, "cowboy")] {
        if debouncer.is_current(token) {
            if state.set_criteria(criteria(text)).is_some() {
                submissions += 1;
            }
        }
    }

    assert_eq!(submissions, 1);
    assert_eq!(state.criteria.text, "cowboy");
    assert_eq!(state.status, Status::Loading);
}
