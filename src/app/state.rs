//! Application state and view model computation.
//!
//! [`AppState`] owns one instance of each interaction component and is the
//! single source of truth for rendering. Transitions live in
//! [`controller`](super::controller); this module holds the data, the
//! derived queries the view reads, cursor bookkeeping, mouse hit-testing and
//! [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```rust
//! use marquee::app::AppState;
//! use marquee::Theme;
//!
//! let state = AppState::new(Theme::default());
//! assert!(!state.is_loading());
//! assert_eq!(state.favorites_badge(), 0);
//! let viewmodel = state.compute_viewmodel();
//! assert!(viewmodel.detail.is_none());
//! ```

use super::modes::{Pane, PointerPress};
use super::notice::Notice;
use crate::catalog::{CatalogFetcher, CatalogState};
use crate::domain::{CatalogItem, ItemId};
use crate::interaction::{FavoritesStore, GestureClearController, SelectionController};
use crate::ui::layout::{self, Layout, Viewport};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfirmDialog, DetailOverlay, DisplayItem, EmptyState, FavoriteChip, FavoritesPanel,
    FooterInfo, HeaderInfo, ListBody, NoticeLine, UIViewModel,
};

/// Default gesture units per terminal column of pointer travel.
pub const DEFAULT_DRAG_UNITS: i32 = 5;

/// Largest accepted `drag_units`. A single column of travel at this scale
/// already activates the gesture.
pub const MAX_DRAG_UNITS: i32 = 100;

/// Tracing filter used when none is configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Default prefix for poster URLs.
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog loading state and request tokens.
    pub catalog: CatalogFetcher,

    /// Session favorites, insertion ordered.
    pub favorites: FavoritesStore,

    /// Item shown in the detail overlay.
    pub selection: SelectionController,

    /// Swipe-to-clear recognizer.
    pub gesture: GestureClearController,

    /// Pane with keyboard focus.
    pub pane: Pane,

    /// Cursor within the loaded catalog items.
    pub catalog_cursor: usize,

    /// Cursor within the favorites.
    pub favorites_cursor: usize,

    /// Latest feedback message, if not dismissed.
    pub notice: Option<Notice>,

    /// Mouse press on the favorites panel that has not been released yet.
    pub pointer: Option<PointerPress>,

    /// Terminal size from the last render.
    pub viewport: Viewport,

    /// Gesture units per column of pointer travel.
    pub drag_units: i32,

    /// Prefix joined with poster paths in the detail overlay.
    pub image_base: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Tracing filter handed to the worker thread with each message.
    pub trace_level: String,
}

impl AppState {
    /// Creates a state with nothing loaded, no favorites and page 1.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            catalog: CatalogFetcher::new(1),
            favorites: FavoritesStore::new(),
            selection: SelectionController::new(),
            gesture: GestureClearController::new(),
            pane: Pane::Catalog,
            catalog_cursor: 0,
            favorites_cursor: 0,
            notice: None,
            pointer: None,
            viewport: Viewport::default(),
            drag_units: DEFAULT_DRAG_UNITS,
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            theme,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }

    /// Whether a catalog fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.catalog.state().is_loading()
    }

    /// Loaded catalog items, or an empty slice.
    #[must_use]
    pub fn items_to_show(&self) -> &[CatalogItem] {
        self.catalog.state().items()
    }

    /// Count shown on the favorites badge.
    #[must_use]
    pub fn favorites_badge(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub const fn detail_visible(&self) -> bool {
        self.selection.is_visible()
    }

    /// Looks an item up by id among loaded items, then favorites.
    #[must_use]
    pub fn find_item(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items_to_show()
            .iter()
            .chain(self.favorites.items())
            .find(|item| item.id == id)
    }

    #[must_use]
    pub fn cursor_item(&self) -> Option<&CatalogItem> {
        self.items_to_show().get(self.catalog_cursor)
    }

    #[must_use]
    pub fn cursor_favorite(&self) -> Option<&CatalogItem> {
        self.favorites.get(self.favorites_cursor)
    }

    /// Moves the focused pane's cursor down, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        let (cursor, len) = self.focused_cursor();
        if len > 0 {
            *cursor = (*cursor + 1) % len;
        }
    }

    /// Moves the focused pane's cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        let (cursor, len) = self.focused_cursor();
        if len > 0 {
            *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
        }
    }

    fn focused_cursor(&mut self) -> (&mut usize, usize) {
        match self.pane {
            Pane::Catalog => (&mut self.catalog_cursor, self.catalog.state().items().len()),
            Pane::Favorites => (&mut self.favorites_cursor, self.favorites.len()),
        }
    }

    /// Keeps both cursors within their lists after the lists change.
    pub fn clamp_cursors(&mut self) {
        let catalog_len = self.items_to_show().len();
        self.catalog_cursor = self.catalog_cursor.min(catalog_len.saturating_sub(1));
        self.favorites_cursor = self.favorites_cursor.min(self.favorites.len().saturating_sub(1));
    }

    /// Current screen geometry.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::compute(self.viewport)
    }

    /// Catalog item drawn on screen row `line`, if any.
    #[must_use]
    pub fn catalog_item_at(&self, line: usize) -> Option<&CatalogItem> {
        let layout = self.layout();
        let slot = layout.list_slot(line)?;
        let items = self.items_to_show();
        let start = layout::window_start(self.catalog_cursor, items.len(), layout.list_height);
        items.get(start + slot)
    }

    /// Favorite whose chip covers `column` on the strip row.
    #[must_use]
    pub fn favorite_at(&self, line: usize, column: usize) -> Option<&CatalogItem> {
        if line != self.layout().panel_strip {
            return None;
        }
        let spans = layout::strip_spans(self.favorites.items().iter().map(|f| f.title.as_str()));
        spans
            .iter()
            .position(|&(start, width)| column >= start && column < start + width)
            .and_then(|index| self.favorites.get(index))
    }

    /// Computes the view model for the current viewport.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let layout = self.layout();

        UIViewModel {
            header: self.compute_header(),
            body: self.compute_body(layout.list_height),
            favorites: self.compute_favorites_panel(),
            detail: self.compute_detail(),
            confirm: self.gesture.is_pending_confirm().then(|| ConfirmDialog {
                title: "Clear Favorites".to_string(),
                message: "Do you want to remove all favorites?".to_string(),
                options: "y: OK   n: Cancel".to_string(),
            }),
            notice: self.notice.as_ref().map(|notice| NoticeLine {
                level: notice.level,
                text: notice.line(),
            }),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.items_to_show().len();
        let title = if count == 0 {
            " Popular Movies ".to_string()
        } else {
            format!(" Popular Movies ({count}) ")
        };
        HeaderInfo { title }
    }

    fn compute_body(&self, height: usize) -> ListBody {
        match self.catalog.state() {
            CatalogState::Idle => ListBody::Status(EmptyState {
                message: "Nothing loaded yet".to_string(),
                subtitle: "Press r to load the catalog".to_string(),
                is_error: false,
            }),
            CatalogState::Loading => ListBody::Status(EmptyState {
                message: "Loading catalog...".to_string(),
                subtitle: String::new(),
                is_error: false,
            }),
            CatalogState::Failed(reason) => ListBody::Status(EmptyState {
                message: reason.clone(),
                subtitle: "Press r to retry".to_string(),
                is_error: true,
            }),
            CatalogState::Loaded(items) if items.is_empty() => ListBody::Status(EmptyState {
                message: "The catalog is empty".to_string(),
                subtitle: "Press r to reload".to_string(),
                is_error: false,
            }),
            CatalogState::Loaded(items) => {
                let start = layout::window_start(self.catalog_cursor, items.len(), height);
                let end = (start + height).min(items.len());
                let rows = items[start..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, item)| self.compute_display_item(item, start + offset))
                    .collect();
                ListBody::Items(rows)
            }
        }
    }

    fn compute_display_item(&self, item: &CatalogItem, index: usize) -> DisplayItem {
        let year = item.release_date.get(..4).unwrap_or("----");
        DisplayItem {
            title: item.title.clone(),
            meta: format!("{year}  ★ {}", item.rating_label()),
            is_selected: self.pane == Pane::Catalog && index == self.catalog_cursor,
            is_favorite: self.favorites.contains(item.id),
        }
    }

    fn compute_favorites_panel(&self) -> FavoritesPanel {
        let focused = self.pane == Pane::Favorites;
        let chips = self
            .favorites
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| FavoriteChip {
                label: layout::strip_label(&item.title),
                is_selected: focused && index == self.favorites_cursor,
            })
            .collect();

        FavoritesPanel {
            title: format!("♥ Favorites ({})", self.favorites_badge()),
            chips,
            shift: self.gesture.offset() / self.drag_units.max(1),
            hint: "← Swipe left to clear favorites".to_string(),
            focused,
        }
    }

    fn compute_detail(&self) -> Option<DetailOverlay> {
        let item = self.selection.current()?;
        Some(DetailOverlay {
            title: item.title.clone(),
            overview: item.overview_or_default().to_string(),
            info: format!(
                "★ Rating: {} | Release: {}",
                item.rating_label(),
                item.release_label()
            ),
            poster_url: item.poster_url(&self.image_base),
            is_favorite: self.favorites.contains(item.id),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.gesture.is_pending_confirm() {
            "y: clear all favorites  n/Esc: keep them"
        } else if self.detail_visible() {
            "Enter/Esc: close  f: favorite  q: quit"
        } else {
            match self.pane {
                Pane::Catalog => {
                    "j/k: navigate  Enter: details  f: favorite  Tab: favorites  r: reload  q: quit"
                }
                Pane::Favorites => {
                    "j/k: navigate  Enter/x: remove  X: swipe to clear  Tab: catalog  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Completion;

    fn loaded_state(count: u64) -> AppState {
        let mut state = AppState::new(Theme::default());
        let request = state.catalog.fetch();
        let items = (1..=count).map(|id| CatalogItem::new(id, format!("Movie {id}"))).collect();
        assert_eq!(state.catalog.complete(request.token, Ok(items)), Completion::Applied);
        state
    }

    #[test]
    fn derived_queries_follow_catalog_state() {
        let mut state = AppState::new(Theme::default());
        assert!(state.items_to_show().is_empty());

        state.catalog.fetch();
        assert!(state.is_loading());
        assert!(matches!(state.compute_viewmodel().body, ListBody::Status(ref s) if s.message.starts_with("Loading")));

        let state = loaded_state(3);
        assert!(!state.is_loading());
        assert_eq!(state.items_to_show().len(), 3);
    }

    #[test]
    fn cursor_wraps_in_focused_pane() {
        let mut state = loaded_state(3);
        state.move_cursor_up();
        assert_eq!(state.catalog_cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.catalog_cursor, 0);

        state.pane = Pane::Favorites;
        state.move_cursor_down();
        assert_eq!(state.favorites_cursor, 0);
    }

    #[test]
    fn clamp_after_lists_shrink() {
        let mut state = loaded_state(5);
        state.catalog_cursor = 4;
        state.favorites_cursor = 2;
        state.clamp_cursors();
        assert_eq!(state.favorites_cursor, 0);
        assert_eq!(state.catalog_cursor, 4);
    }

    #[test]
    fn hit_testing_uses_visible_window() {
        let mut state = loaded_state(40);
        let layout = state.layout();
        assert_eq!(state.catalog_item_at(layout.list_top).map(|i| i.id), Some(1));

        state.catalog_cursor = 30;
        let start = layout::window_start(30, 40, layout.list_height);
        assert_eq!(
            state.catalog_item_at(layout.list_top).map(|i| i.id),
            Some(start as u64 + 1)
        );
        assert!(state.catalog_item_at(1).is_none());
    }

    #[test]
    fn favorite_chip_hit_testing() {
        let mut state = AppState::new(Theme::default());
        state.favorites.add(CatalogItem::new(10, "Up"));
        state.favorites.add(CatalogItem::new(11, "Heat"));
        let strip = state.layout().panel_strip;

        assert_eq!(state.favorite_at(strip, 3).map(|f| f.id), Some(10));
        assert_eq!(state.favorite_at(strip, 8).map(|f| f.id), Some(11));
        assert!(state.favorite_at(strip, 6).is_none());
        assert!(state.favorite_at(strip - 1, 3).is_none());
    }

    #[test]
    fn viewmodel_reflects_overlay_and_badge() {
        let mut state = loaded_state(2);
        state.favorites.add(CatalogItem::new(1, "Movie 1"));
        state.selection.open(CatalogItem::new(1, "Movie 1"));

        let vm = state.compute_viewmodel();
        assert_eq!(vm.favorites.title, "♥ Favorites (1)");
        let detail = vm.detail.expect("overlay visible");
        assert!(detail.is_favorite);
        assert_eq!(detail.overview, crate::domain::NO_OVERVIEW);
        assert!(vm.confirm.is_none());
    }
}
