//! View-event transitions composed over the interaction components.
//!
//! Each method here is one event the view layer can send. They run to
//! completion on the plugin thread, touch only the components they need, and
//! set the user-facing [`Notice`] where there is feedback to give.
//!
//! The only cross-component rule: removing a favorite is never blocked by a
//! pending clear confirmation. Only a second drag gesture is.

use super::notice::Notice;
use super::state::AppState;
use crate::catalog::{Completion, FetchRequest, RequestToken};
use crate::domain::{CatalogItem, ItemId, MarqueeError, Result};
use crate::interaction::{AddOutcome, GestureEvent, RemoveOutcome};

impl AppState {
    /// Starts a catalog fetch. The catalog is `Loading` when this returns.
    pub fn request_fetch(&mut self) -> FetchRequest {
        let request = self.catalog.fetch();
        tracing::info!(token = %request.token, page = request.page, "catalog fetch requested");
        request
    }

    /// Applies a completed fetch.
    ///
    /// Stale completions leave every component untouched. Applied failures
    /// raise an error notice.
    pub fn apply_catalog_result(
        &mut self,
        token: RequestToken,
        result: Result<Vec<CatalogItem>>,
    ) -> Completion {
        let failure = result.as_ref().err().map(ToString::to_string);
        let completion = self.catalog.complete(token, result);

        if completion == Completion::Applied {
            self.clamp_cursors();
            if let Some(reason) = failure {
                self.notice = Some(Notice::fetch_failed(&reason));
            }
        }
        completion
    }

    /// Fails the outstanding fetch with `reason`.
    ///
    /// For failures that cannot be tied to a token, such as an unreadable
    /// worker reply. Returns `false` when nothing was outstanding.
    pub fn fail_pending_fetch(&mut self, reason: &str) -> bool {
        let Some(token) = self.catalog.pending_token() else {
            return false;
        };
        let failure = Err(MarqueeError::Fetch(reason.to_string()));
        self.apply_catalog_result(token, failure) == Completion::Applied
    }

    /// Opens the detail overlay for a loaded item.
    ///
    /// Returns `false` when no item with `id` is known.
    pub fn tap_item(&mut self, id: ItemId) -> bool {
        let Some(item) = self.find_item(id).cloned() else {
            tracing::debug!(item_id = id, "tap on unknown item ignored");
            return false;
        };
        self.open_detail(item);
        true
    }

    /// Adds a loaded item to favorites.
    pub fn long_press_item(&mut self, id: ItemId) -> Option<AddOutcome> {
        let Some(item) = self.find_item(id).cloned() else {
            tracing::debug!(item_id = id, "long press on unknown item ignored");
            return None;
        };
        Some(self.add_favorite(item))
    }

    /// Adds `item` to favorites and reports the outcome as a notice.
    pub fn add_favorite(&mut self, item: CatalogItem) -> AddOutcome {
        let notice = Notice::favorite_added(&item);
        let duplicate = Notice::already_favorited(&item);
        let outcome = self.favorites.add(item);

        self.notice = Some(match outcome {
            AddOutcome::Added => notice,
            AddOutcome::AlreadyPresent => duplicate,
        });
        outcome
    }

    /// Removes a favorite. Proceeds even while a clear confirmation is
    /// pending. A missing id is a silent no-op.
    pub fn tap_remove_favorite(&mut self, id: ItemId) -> RemoveOutcome {
        let outcome = self.favorites.remove(id);
        if let RemoveOutcome::Removed(item) = &outcome {
            self.notice = Some(Notice::favorite_removed(item));
            self.clamp_cursors();
        }
        outcome
    }

    /// Feeds the drag displacement to the gesture recognizer.
    pub fn drag_move(&mut self, dx: i32) -> bool {
        self.gesture.drag_move(dx)
    }

    /// Ends the drag. Returns the confirmation request if one was raised.
    pub fn drag_release(&mut self, dx: i32) -> Option<GestureEvent> {
        let event = self.gesture.release(dx);
        if event.is_some() {
            tracing::info!(favorites = self.favorites.len(), "clear confirmation requested");
        }
        event
    }

    /// Accepts the pending clear and empties favorites.
    ///
    /// Returns the number of favorites removed, or `None` if no
    /// confirmation was pending.
    pub fn confirm_clear(&mut self) -> Option<usize> {
        if !self.gesture.confirm() {
            return None;
        }
        let removed = self.favorites.clear();
        self.clamp_cursors();
        self.notice = Some(Notice::favorites_cleared(removed));
        tracing::info!(removed = removed, "favorites cleared");
        Some(removed)
    }

    /// Rejects the pending clear. Favorites are unchanged.
    pub fn cancel_clear(&mut self) -> bool {
        self.gesture.cancel()
    }

    /// Shows `item` in the detail overlay, replacing any open item.
    pub fn open_detail(&mut self, item: CatalogItem) {
        if let Some(previous) = self.selection.open(item) {
            tracing::debug!(item_id = previous.id, "detail overlay replaced");
        }
    }

    pub fn close_detail(&mut self) -> bool {
        self.selection.close()
    }
}
