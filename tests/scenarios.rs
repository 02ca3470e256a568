//! End-to-end interaction flows driven through `handle_event`.

use marquee::app::Action;
use marquee::catalog::RequestToken;
use marquee::interaction::{AddOutcome, GesturePhase, RemoveOutcome};
use marquee::worker::{MarqueeWorker, WorkerMessage, WorkerResponse};
use marquee::{handle_event, AppState, CatalogItem, CatalogState, Event, FavoritesStore, Theme};

fn movie(id: u64, title: &str) -> CatalogItem {
    CatalogItem::new(id, title)
}

fn fetch(state: &mut AppState) -> RequestToken {
    let (_, actions) = handle_event(state, &Event::RequestFetch).unwrap();
    match actions.as_slice() {
        [Action::FetchCatalog(request)] => request.token,
        other => panic!("expected one fetch action, got {other:?}"),
    }
}

fn deliver(state: &mut AppState, token: RequestToken, items: Vec<CatalogItem>) -> bool {
    let response = WorkerResponse::CatalogDecoded { token, items };
    handle_event(state, &Event::WorkerResponse(response)).unwrap().0
}

fn loaded_state() -> AppState {
    let mut state = AppState::new(Theme::default());
    let token = fetch(&mut state);
    deliver(
        &mut state,
        token,
        vec![movie(1, "Dune"), movie(2, "Heat"), movie(3, "Alien")],
    );
    state
}

fn favorite_ids(state: &AppState) -> Vec<u64> {
    state.favorites.items().iter().map(|item| item.id).collect()
}

#[test]
fn favorites_add_duplicate_and_remove() {
    let mut store = FavoritesStore::new();

    assert_eq!(store.add(movie(1, "Dune")), AddOutcome::Added);
    assert_eq!(store.add(movie(1, "Dune")), AddOutcome::AlreadyPresent);
    assert_eq!(store.len(), 1);

    assert_eq!(store.remove(1), RemoveOutcome::Removed(movie(1, "Dune")));
    assert_eq!(store.remove(1), RemoveOutcome::NotFound);
    assert!(store.is_empty());
}

#[test]
fn long_press_adds_in_order_without_duplicates() {
    let mut state = loaded_state();

    for id in [2, 1, 2] {
        handle_event(&mut state, &Event::LongPressItem(id)).unwrap();
    }

    assert_eq!(favorite_ids(&state), vec![2, 1]);
    assert_eq!(state.favorites_badge(), 2);
}

#[test]
fn tap_opens_detail_and_escape_closes_it() {
    let mut state = loaded_state();

    let (render, _) = handle_event(&mut state, &Event::TapItem(3)).unwrap();
    assert!(render);
    assert!(state.detail_visible());
    assert_eq!(state.selection.current().map(|item| item.id), Some(3));

    handle_event(&mut state, &Event::Escape).unwrap();
    assert!(!state.detail_visible());
}

#[test]
fn swipe_past_threshold_then_confirm_clears() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::LongPressItem(1)).unwrap();
    handle_event(&mut state, &Event::LongPressItem(2)).unwrap();

    handle_event(&mut state, &Event::DragMove(-60)).unwrap();
    handle_event(&mut state, &Event::DragMove(-150)).unwrap();
    assert_eq!(state.gesture.offset(), -150);

    handle_event(&mut state, &Event::DragRelease(-150)).unwrap();
    assert!(state.gesture.is_pending_confirm());
    assert_eq!(state.gesture.offset(), 0);

    handle_event(&mut state, &Event::ConfirmClear).unwrap();
    assert!(state.favorites.is_empty());
    assert_eq!(state.gesture.state().phase, GesturePhase::Idle);
}

#[test]
fn short_swipe_changes_nothing() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::LongPressItem(1)).unwrap();

    handle_event(&mut state, &Event::DragMove(-50)).unwrap();
    handle_event(&mut state, &Event::DragRelease(-50)).unwrap();

    assert!(!state.gesture.is_pending_confirm());
    assert_eq!(state.gesture.offset(), 0);
    assert_eq!(favorite_ids(&state), vec![1]);
}

#[test]
fn cancelled_clear_keeps_favorites() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::LongPressItem(3)).unwrap();

    handle_event(&mut state, &Event::SwipeClear).unwrap();
    assert!(state.gesture.is_pending_confirm());

    handle_event(&mut state, &Event::CancelClear).unwrap();
    assert!(!state.gesture.is_pending_confirm());
    assert_eq!(favorite_ids(&state), vec![3]);
}

#[test]
fn removal_is_allowed_while_clear_is_pending() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::LongPressItem(1)).unwrap();
    handle_event(&mut state, &Event::LongPressItem(2)).unwrap();
    handle_event(&mut state, &Event::SwipeClear).unwrap();

    handle_event(&mut state, &Event::TapRemoveFavorite(1)).unwrap();
    assert_eq!(favorite_ids(&state), vec![2]);
    assert!(state.gesture.is_pending_confirm());

    // A second gesture is ignored until the dialog is answered.
    handle_event(&mut state, &Event::DragMove(-200)).unwrap();
    assert_eq!(state.gesture.offset(), 0);

    handle_event(&mut state, &Event::ConfirmClear).unwrap();
    assert!(state.favorites.is_empty());
}

#[test]
fn later_fetch_wins_over_earlier_response() {
    let mut state = AppState::new(Theme::default());
    let first = fetch(&mut state);
    let second = fetch(&mut state);
    assert!(state.is_loading());

    deliver(&mut state, second, vec![movie(20, "B")]);
    assert!(!deliver(&mut state, first, vec![movie(10, "A")]));

    assert_eq!(state.catalog.state(), &CatalogState::Loaded(vec![movie(20, "B")]));
}

#[test]
fn stale_web_response_is_not_forwarded_to_worker() {
    let mut state = AppState::new(Theme::default());
    let first = fetch(&mut state);
    let second = fetch(&mut state);

    let stale = Event::CatalogResponse {
        token: first,
        status: 200,
        body: b"{}".to_vec(),
    };
    let (_, actions) = handle_event(&mut state, &stale).unwrap();
    assert!(actions.is_empty());

    let current = Event::CatalogResponse {
        token: second,
        status: 200,
        body: b"{}".to_vec(),
    };
    let (_, actions) = handle_event(&mut state, &current).unwrap();
    assert!(matches!(
        actions.as_slice(),
        [Action::PostToWorker(WorkerMessage::DecodeCatalog { token, .. })] if *token == second
    ));
}

#[test]
fn web_response_flows_through_worker_into_catalog() {
    let mut state = AppState::new(Theme::default());
    let token = fetch(&mut state);

    let body = br#"{"page":1,"results":[
        {"id":7,"title":"Arrival","vote_average":7.6,"release_date":"2016-11-10"}
    ]}"#;
    let (_, actions) = handle_event(
        &mut state,
        &Event::CatalogResponse {
            token,
            status: 200,
            body: body.to_vec(),
        },
    )
    .unwrap();
    let [Action::PostToWorker(message)] = actions.as_slice() else {
        panic!("expected a worker message, got {actions:?}");
    };

    let mut worker = MarqueeWorker::default();
    let reply = worker
        .handle_payload(&serde_json::to_string(message).unwrap())
        .unwrap();
    let response: WorkerResponse = serde_json::from_str(&reply).unwrap();

    let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    assert!(render);
    assert_eq!(state.items_to_show().len(), 1);
    assert_eq!(state.items_to_show()[0].title, "Arrival");
}

#[test]
fn rejected_response_fails_the_catalog() {
    let mut state = AppState::new(Theme::default());
    let token = fetch(&mut state);

    let response = WorkerResponse::CatalogRejected {
        token,
        reason: "catalog service responded with HTTP 401".to_string(),
    };
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

    assert!(state.catalog.state().failure().is_some());
    assert!(state.items_to_show().is_empty());
    assert!(state.notice.is_some());
}

#[test]
fn reload_after_failure_shows_new_items() {
    let mut state = AppState::new(Theme::default());
    let token = fetch(&mut state);
    let response = WorkerResponse::CatalogRejected {
        token,
        reason: "catalog service responded with HTTP 503".to_string(),
    };
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    assert!(state.catalog.state().failure().is_some());

    let retry = fetch(&mut state);
    assert!(state.is_loading());
    assert!(deliver(&mut state, retry, vec![movie(4, "Ran")]));
    assert_eq!(state.catalog.state(), &CatalogState::Loaded(vec![movie(4, "Ran")]));
}

#[test]
fn worker_failure_does_not_leave_catalog_loading() {
    let mut state = AppState::new(Theme::default());
    fetch(&mut state);

    let response = WorkerResponse::Error {
        message: "unreadable worker response".to_string(),
    };
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

    assert!(!state.is_loading());
    assert_eq!(
        state.catalog.state().failure(),
        Some("unreadable worker response")
    );
}
