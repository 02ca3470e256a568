//! Event handling and state transition logic.
//!
//! This module turns user input, host callbacks and worker responses into
//! state changes and action sequences. It is the only place where events are
//! interpreted; the plugin shim in `main.rs` maps raw Zellij input to
//! [`Event`]s and executes the returned [`Action`]s.
//!
//! # Event Types
//!
//! - **View**: `RequestFetch`, `TapItem`, `LongPressItem`, `DragMove`,
//!   `DragRelease`, `ConfirmClear`, `CancelClear`, `TapRemoveFavorite`,
//!   `OpenDetail`, `CloseDetail`
//! - **Keyboard**: `CursorDown`, `CursorUp`, `SwitchPane`, `Activate`,
//!   `FavoriteCursor`, `RemoveCursor`, `SwipeClear`, `Escape`, `CloseFocus`
//! - **Mouse**: `PointerDown`, `PointerSecondary`, `PointerHold`, `PointerUp`
//! - **Host**: `CatalogResponse`, `PermissionsResult`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{handle_event, AppState, Event};
//! use marquee::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::CursorDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use super::modes::{Pane, PointerPress};
use super::notice::Notice;
use crate::app::{Action, AppState};
use crate::catalog::{Completion, RequestToken};
use crate::domain::error::{MarqueeError, Result};
use crate::domain::{CatalogItem, ItemId};
use crate::interaction::{exceeds_activation, RemoveOutcome, ACTIVATION_THRESHOLD, RELEASE_THRESHOLD};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, host callbacks, or worker responses.
///
/// Pointer positions are 1-indexed screen rows and 0-indexed columns, the
/// same coordinates the renderer draws with.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Starts (or restarts) the catalog fetch.
    RequestFetch,
    /// Opens the detail overlay for a loaded item.
    TapItem(ItemId),
    /// Adds a loaded item to favorites.
    LongPressItem(ItemId),
    /// Total horizontal displacement of the current drag.
    DragMove(i32),
    /// Final horizontal displacement when the drag ends.
    DragRelease(i32),
    /// Accepts a pending clear.
    ConfirmClear,
    /// Rejects a pending clear.
    CancelClear,
    /// Removes one favorite.
    TapRemoveFavorite(ItemId),
    /// Shows an arbitrary item in the detail overlay.
    OpenDetail(CatalogItem),
    CloseDetail,

    /// Moves the focused pane's cursor down (wraps to top).
    CursorDown,
    /// Moves the focused pane's cursor up (wraps to bottom).
    CursorUp,
    /// Moves keyboard focus between the catalog and favorites.
    SwitchPane,
    /// `Enter`: close the overlay, open detail, or remove a favorite.
    Activate,
    /// Favorites the overlay item or the catalog cursor item.
    FavoriteCursor,
    /// Removes the favorite under the cursor.
    RemoveCursor,
    /// Keyboard equivalent of a full left swipe on the favorites panel.
    SwipeClear,
    /// Dismisses the confirmation, the overlay, or the notice, in that order.
    Escape,
    /// Hides the plugin pane.
    CloseFocus,

    /// Left button pressed.
    PointerDown { line: usize, column: usize },
    /// Right button pressed.
    PointerSecondary { line: usize, column: usize },
    /// Pointer moved with the left button held.
    PointerHold { line: usize, column: usize },
    /// Left button released.
    PointerUp { line: usize, column: usize },

    /// Raw catalog HTTP response for the request identified by `token`.
    CatalogResponse {
        token: RequestToken,
        status: u16,
        body: Vec<u8>,
    },

    /// Whether the user granted the permissions the plugin asked for.
    PermissionsResult { granted: bool },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the screen needs redrawing.
///
/// # Errors
///
/// Every event currently resolves to `Ok`. Failures are recorded in state
/// (a `Failed` catalog, a notice) rather than returned; the `Result` is
/// the contract the plugin shim logs against.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::RequestFetch => {
            let request = state.request_fetch();
            Ok((true, vec![Action::FetchCatalog(request)]))
        }
        Event::TapItem(id) => Ok((state.tap_item(*id), vec![])),
        Event::LongPressItem(id) => Ok((state.long_press_item(*id).is_some(), vec![])),
        Event::DragMove(dx) => Ok((state.drag_move(*dx), vec![])),
        Event::DragRelease(dx) => {
            let was_displaced = state.gesture.offset() != 0;
            let requested = state.drag_release(*dx).is_some();
            Ok((requested || was_displaced, vec![]))
        }
        Event::ConfirmClear => Ok((state.confirm_clear().is_some(), vec![])),
        Event::CancelClear => Ok((state.cancel_clear(), vec![])),
        Event::TapRemoveFavorite(id) => {
            let outcome = state.tap_remove_favorite(*id);
            Ok((outcome != RemoveOutcome::NotFound, vec![]))
        }
        Event::OpenDetail(item) => {
            state.open_detail(item.clone());
            Ok((true, vec![]))
        }
        Event::CloseDetail => Ok((state.close_detail(), vec![])),

        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::SwitchPane => {
            state.pane = state.pane.toggled();
            tracing::debug!(pane = ?state.pane, "focus switched");
            Ok((true, vec![]))
        }
        Event::Activate => {
            if state.detail_visible() {
                return Ok((state.close_detail(), vec![]));
            }
            match state.pane {
                Pane::Catalog => {
                    let Some(id) = state.cursor_item().map(|item| item.id) else {
                        return Ok((false, vec![]));
                    };
                    handle_event(state, &Event::TapItem(id))
                }
                Pane::Favorites => handle_event(state, &Event::RemoveCursor),
            }
        }
        Event::FavoriteCursor => {
            let target = state
                .selection
                .current()
                .or_else(|| state.cursor_item())
                .cloned();
            let Some(item) = target else {
                tracing::debug!("nothing to favorite");
                return Ok((false, vec![]));
            };
            state.add_favorite(item);
            Ok((true, vec![]))
        }
        Event::RemoveCursor => {
            let target = match state.pane {
                Pane::Favorites => state.cursor_favorite().map(|item| item.id),
                Pane::Catalog => state
                    .cursor_item()
                    .map(|item| item.id)
                    .filter(|id| state.favorites.contains(*id)),
            };
            let Some(id) = target else {
                return Ok((false, vec![]));
            };
            handle_event(state, &Event::TapRemoveFavorite(id))
        }
        Event::SwipeClear => {
            let dx = RELEASE_THRESHOLD - ACTIVATION_THRESHOLD;
            state.drag_move(dx);
            Ok((state.drag_release(dx).is_some(), vec![]))
        }
        Event::Escape => {
            if state.cancel_clear() {
                return Ok((true, vec![]));
            }
            if state.close_detail() {
                return Ok((true, vec![]));
            }
            Ok((state.notice.take().is_some(), vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::PointerDown { line, column } => {
            let layout = state.layout();
            if layout.in_favorites_panel(*line) {
                let favorite = state.favorite_at(*line, *column).map(|item| item.id);
                state.pointer = Some(PointerPress {
                    column: *column,
                    favorite,
                });
                state.pane = Pane::Favorites;
                tracing::trace!(column = column, favorite = ?favorite, "pointer pressed on favorites");
                return Ok((true, vec![]));
            }
            if state.gesture.is_pending_confirm() {
                return Ok((false, vec![]));
            }
            if state.detail_visible() {
                return Ok((state.close_detail(), vec![]));
            }
            let Some(id) = state.catalog_item_at(*line).map(|item| item.id) else {
                return Ok((false, vec![]));
            };
            focus_catalog_item(state, id);
            handle_event(state, &Event::TapItem(id))
        }
        Event::PointerSecondary { line, .. } => {
            if state.gesture.is_pending_confirm() || state.detail_visible() {
                return Ok((false, vec![]));
            }
            let Some(id) = state.catalog_item_at(*line).map(|item| item.id) else {
                return Ok((false, vec![]));
            };
            focus_catalog_item(state, id);
            handle_event(state, &Event::LongPressItem(id))
        }
        Event::PointerHold { column, .. } => {
            let Some(press) = state.pointer else {
                return Ok((false, vec![]));
            };
            let dx = pointer_displacement(press.column, *column, state.drag_units);
            handle_event(state, &Event::DragMove(dx))
        }
        Event::PointerUp { column, .. } => {
            let Some(press) = state.pointer.take() else {
                return Ok((false, vec![]));
            };
            let dx = pointer_displacement(press.column, *column, state.drag_units);
            let activated = state.gesture.is_dragging() || exceeds_activation(dx);

            if !activated {
                if !state.gesture.is_pending_confirm() {
                    state.drag_release(dx);
                }
                return match press.favorite {
                    Some(id) => handle_event(state, &Event::TapRemoveFavorite(id)),
                    None => Ok((true, vec![])),
                };
            }
            handle_event(state, &Event::DragRelease(dx))
        }

        Event::CatalogResponse {
            token,
            status,
            body,
        } => {
            if state.catalog.pending_token() != Some(*token) {
                tracing::debug!(token = %token, "dropping response for superseded fetch");
                return Ok((false, vec![]));
            }
            tracing::debug!(token = %token, status = status, bytes = body.len(), "catalog response received");
            let body = match std::str::from_utf8(body) {
                Ok(text) => text.to_string(),
                Err(e) => {
                    tracing::warn!(token = %token, error = %e, "catalog response is not UTF-8");
                    let failure = MarqueeError::Fetch(format!("catalog response is not valid UTF-8 ({e})"));
                    let completion = state.apply_catalog_result(*token, Err(failure));
                    return Ok((completion == Completion::Applied, vec![]));
                }
            };
            let message = WorkerMessage::decode_catalog(*token, *status, body)
                .with_trace_level(state.trace_level.clone());
            Ok((false, vec![Action::PostToWorker(message)]))
        }
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::info!("permissions granted, loading catalog");
                handle_event(state, &Event::RequestFetch)
            } else {
                tracing::warn!("permissions denied");
                state.notice = Some(Notice::fetch_failed("web access was not granted"));
                Ok((true, vec![]))
            }
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogDecoded { token, items } => {
                let completion = state.apply_catalog_result(*token, Ok(items.clone()));
                Ok((completion == Completion::Applied, vec![]))
            }
            WorkerResponse::CatalogRejected { token, reason } => {
                let completion = state
                    .apply_catalog_result(*token, Err(MarqueeError::Fetch(reason.clone())));
                Ok((completion == Completion::Applied, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!(error = %message, "worker error");
                if !state.fail_pending_fetch(message) {
                    state.notice = Some(Notice::fetch_failed(message));
                }
                Ok((true, vec![]))
            }
        },
    }
}

/// Converts pointer travel in columns into gesture units.
///
/// Saturates symmetrically at `±i32::MAX`.
fn pointer_displacement(from: usize, to: usize, units_per_column: i32) -> i32 {
    let columns = if to >= from {
        i32::try_from(to - from).unwrap_or(i32::MAX)
    } else {
        -i32::try_from(from - to).unwrap_or(i32::MAX)
    };
    columns.saturating_mul(units_per_column).max(-i32::MAX)
}

fn focus_catalog_item(state: &mut AppState, id: ItemId) {
    if let Some(index) = state.items_to_show().iter().position(|item| item.id == id) {
        state.pane = Pane::Catalog;
        state.catalog_cursor = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NoticeLevel;
    use crate::ui::theme::Theme;

    fn loaded_state(count: u64) -> AppState {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::RequestFetch).unwrap();
        let Action::FetchCatalog(request) = actions[0].clone() else {
            panic!("expected a fetch action");
        };
        let items = (1..=count).map(|id| CatalogItem::new(id, format!("Movie {id}"))).collect();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogDecoded {
                token: request.token,
                items,
            }),
        )
        .unwrap();
        state
    }

    fn fetch_token(state: &mut AppState) -> RequestToken {
        let (_, actions) = handle_event(state, &Event::RequestFetch).unwrap();
        match &actions[0] {
            Action::FetchCatalog(request) => request.token,
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn request_fetch_sets_loading_and_emits_action() {
        let mut state = AppState::new(Theme::default());
        let (render, actions) = handle_event(&mut state, &Event::RequestFetch).unwrap();
        assert!(render);
        assert!(state.is_loading());
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn response_for_pending_token_goes_to_worker() {
        let mut state = AppState::new(Theme::default());
        let token = fetch_token(&mut state);

        let (_, actions) = handle_event(
            &mut state,
            &Event::CatalogResponse {
                token,
                status: 200,
                body: br#"{"results":[]}"#.to_vec(),
            },
        )
        .unwrap();
        assert!(matches!(
            &actions[0],
            Action::PostToWorker(WorkerMessage::DecodeCatalog { status: 200, .. })
        ));
    }

    #[test]
    fn worker_message_carries_configured_trace_level() {
        let mut state = AppState::new(Theme::default());
        state.trace_level = "marquee=debug".to_string();
        let token = fetch_token(&mut state);

        let (_, actions) = handle_event(
            &mut state,
            &Event::CatalogResponse {
                token,
                status: 200,
                body: b"{}".to_vec(),
            },
        )
        .unwrap();
        let Action::PostToWorker(message) = &actions[0] else {
            panic!("expected a worker message, got {actions:?}");
        };
        assert_eq!(message.trace_level(), Some("marquee=debug"));
    }

    #[test]
    fn non_utf8_body_fails_the_fetch_without_worker() {
        let mut state = AppState::new(Theme::default());
        let token = fetch_token(&mut state);

        let (render, actions) = handle_event(
            &mut state,
            &Event::CatalogResponse {
                token,
                status: 200,
                body: vec![b'{', 0xff, 0xfe, b'}'],
            },
        )
        .unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.is_loading());
        assert!(state
            .catalog
            .state()
            .failure()
            .is_some_and(|reason| reason.contains("not valid UTF-8")));
        assert_eq!(state.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn worker_error_fails_the_outstanding_fetch() {
        let mut state = AppState::new(Theme::default());
        fetch_token(&mut state);

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "boom".to_string(),
            }),
        )
        .unwrap();
        assert!(render);
        assert!(!state.is_loading());
        assert_eq!(state.catalog.state(), &crate::catalog::CatalogState::Failed("boom".to_string()));
        assert_eq!(state.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));

        // Recovery goes through an ordinary reload.
        let token = fetch_token(&mut state);
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogDecoded {
                token,
                items: vec![CatalogItem::new(1, "A")],
            }),
        )
        .unwrap();
        assert_eq!(state.items_to_show().len(), 1);
    }

    #[test]
    fn worker_error_without_fetch_only_raises_notice() {
        let mut state = loaded_state(2);
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "boom".to_string(),
            }),
        )
        .unwrap();

        assert_eq!(state.items_to_show().len(), 2);
        assert_eq!(state.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn superseded_response_is_dropped() {
        let mut state = AppState::new(Theme::default());
        let first = fetch_token(&mut state);
        let second = fetch_token(&mut state);

        let (render, actions) = handle_event(
            &mut state,
            &Event::CatalogResponse {
                token: first,
                status: 200,
                body: vec![],
            },
        )
        .unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogDecoded {
                token: first,
                items: vec![CatalogItem::new(1, "A")],
            }),
        )
        .unwrap();
        assert!(!render);
        assert!(state.is_loading());

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogDecoded {
                token: second,
                items: vec![CatalogItem::new(2, "B")],
            }),
        )
        .unwrap();
        assert_eq!(state.items_to_show()[0].id, 2);
    }

    #[test]
    fn rejected_response_shows_error_notice() {
        let mut state = AppState::new(Theme::default());
        let token = fetch_token(&mut state);
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogRejected {
                token,
                reason: "HTTP 401".to_string(),
            }),
        )
        .unwrap();

        assert!(state.catalog.state().failure().is_some());
        assert_eq!(state.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn escape_priority_confirmation_overlay_notice() {
        let mut state = loaded_state(2);
        handle_event(&mut state, &Event::LongPressItem(1)).unwrap();
        handle_event(&mut state, &Event::TapItem(2)).unwrap();
        handle_event(&mut state, &Event::SwipeClear).unwrap();
        assert!(state.gesture.is_pending_confirm());

        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!state.gesture.is_pending_confirm());
        assert!(state.detail_visible());
        assert_eq!(state.favorites_badge(), 1);

        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!state.detail_visible());
        assert!(state.notice.is_some());

        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(state.notice.is_none());

        let (render, _) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!render);
    }

    #[test]
    fn keyboard_activate_and_favorite() {
        let mut state = loaded_state(3);
        handle_event(&mut state, &Event::CursorDown).unwrap();
        handle_event(&mut state, &Event::FavoriteCursor).unwrap();
        assert!(state.favorites.contains(2));

        handle_event(&mut state, &Event::Activate).unwrap();
        assert_eq!(state.selection.current().map(|i| i.id), Some(2));
        handle_event(&mut state, &Event::Activate).unwrap();
        assert!(!state.detail_visible());

        handle_event(&mut state, &Event::SwitchPane).unwrap();
        handle_event(&mut state, &Event::Activate).unwrap();
        assert_eq!(state.favorites_badge(), 0);
    }

    #[test]
    fn swipe_clear_then_confirm() {
        let mut state = loaded_state(3);
        handle_event(&mut state, &Event::LongPressItem(1)).unwrap();
        handle_event(&mut state, &Event::LongPressItem(3)).unwrap();

        handle_event(&mut state, &Event::SwipeClear).unwrap();
        assert!(state.compute_viewmodel().confirm.is_some());

        handle_event(&mut state, &Event::ConfirmClear).unwrap();
        assert_eq!(state.favorites_badge(), 0);
        assert_eq!(state.gesture.offset(), 0);
        assert!(state.compute_viewmodel().confirm.is_none());
    }

    #[test]
    fn pointer_drag_on_panel_requests_confirmation() {
        let mut state = loaded_state(1);
        handle_event(&mut state, &Event::LongPressItem(1)).unwrap();
        let strip = state.layout().panel_strip;

        handle_event(&mut state, &Event::PointerDown { line: strip, column: 60 }).unwrap();
        handle_event(&mut state, &Event::PointerHold { line: strip, column: 50 }).unwrap();
        assert_eq!(state.gesture.offset(), -50);
        assert_eq!(state.compute_viewmodel().favorites.shift, -10);

        handle_event(&mut state, &Event::PointerHold { line: strip, column: 30 }).unwrap();
        handle_event(&mut state, &Event::PointerUp { line: strip, column: 30 }).unwrap();
        assert!(state.gesture.is_pending_confirm());
        assert_eq!(state.gesture.offset(), 0);
        assert!(state.pointer.is_none());
    }

    #[test]
    fn huge_drag_scale_saturates_instead_of_overflowing() {
        let mut state = loaded_state(1);
        handle_event(&mut state, &Event::LongPressItem(1)).unwrap();
        state.drag_units = 2_000_000_000;
        let strip = state.layout().panel_strip;

        handle_event(&mut state, &Event::PointerDown { line: strip, column: 60 }).unwrap();
        handle_event(&mut state, &Event::PointerHold { line: strip, column: 50 }).unwrap();
        assert_eq!(state.gesture.offset(), -i32::MAX);
        handle_event(&mut state, &Event::PointerUp { line: strip, column: 50 }).unwrap();

        assert!(state.gesture.is_pending_confirm());
        assert_eq!(pointer_displacement(60, 50, i32::MAX), -i32::MAX);
        assert_eq!(pointer_displacement(50, 60, i32::MAX), i32::MAX);
    }

    #[test]
    fn short_drag_snaps_back_without_confirmation() {
        let mut state = loaded_state(1);
        let strip = state.layout().panel_strip;

        handle_event(&mut state, &Event::PointerDown { line: strip, column: 60 }).unwrap();
        handle_event(&mut state, &Event::PointerHold { line: strip, column: 50 }).unwrap();
        handle_event(&mut state, &Event::PointerUp { line: strip, column: 50 }).unwrap();

        assert!(!state.gesture.is_pending_confirm());
        assert_eq!(state.gesture.offset(), 0);
    }

    #[test]
    fn click_on_chip_removes_favorite() {
        let mut state = loaded_state(2);
        handle_event(&mut state, &Event::LongPressItem(2)).unwrap();
        let strip = state.layout().panel_strip;

        handle_event(&mut state, &Event::PointerDown { line: strip, column: 3 }).unwrap();
        handle_event(&mut state, &Event::PointerUp { line: strip, column: 3 }).unwrap();
        assert_eq!(state.favorites_badge(), 0);
    }

    #[test]
    fn chip_click_removes_while_confirmation_pending() {
        let mut state = loaded_state(2);
        handle_event(&mut state, &Event::LongPressItem(1)).unwrap();
        handle_event(&mut state, &Event::LongPressItem(2)).unwrap();
        handle_event(&mut state, &Event::SwipeClear).unwrap();
        let strip = state.layout().panel_strip;

        handle_event(&mut state, &Event::PointerDown { line: strip, column: 3 }).unwrap();
        handle_event(&mut state, &Event::PointerUp { line: strip, column: 3 }).unwrap();

        assert_eq!(state.favorites_badge(), 1);
        assert!(state.gesture.is_pending_confirm());
    }

    #[test]
    fn mouse_clicks_on_rows_tap_and_long_press() {
        let mut state = loaded_state(3);
        let top = state.layout().list_top;

        handle_event(&mut state, &Event::PointerSecondary { line: top + 1, column: 4 }).unwrap();
        assert!(state.favorites.contains(2));
        assert_eq!(state.catalog_cursor, 1);

        handle_event(&mut state, &Event::PointerDown { line: top + 2, column: 4 }).unwrap();
        assert_eq!(state.selection.current().map(|i| i.id), Some(3));

        handle_event(&mut state, &Event::PointerDown { line: top, column: 4 }).unwrap();
        assert!(!state.detail_visible());
    }

    #[test]
    fn denied_permissions_surface_notice() {
        let mut state = AppState::new(Theme::default());
        let (render, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.notice.is_some());

        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert!(matches!(actions[0], Action::FetchCatalog(_)));
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = AppState::new(Theme::default());
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
