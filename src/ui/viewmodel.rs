//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel` and consumed by
//! the renderer. They hold display-ready strings and flags only; no
//! component state leaks into rendering.

use crate::app::NoticeLevel;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Catalog list, or a status message when there is nothing to list.
    pub body: ListBody,

    pub favorites: FavoritesPanel,

    /// Present exactly when the selection is open.
    pub detail: Option<DetailOverlay>,

    /// Present while a clear confirmation is pending.
    pub confirm: Option<ConfirmDialog>,

    pub notice: Option<NoticeLine>,

    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    /// Visible window of the catalog.
    Items(Vec<DisplayItem>),
    /// Loading, failure, or nothing loaded yet.
    Status(EmptyState),
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    /// Secondary column, e.g. `"2024  ★ 7.4"`.
    pub meta: String,
    pub is_selected: bool,
    pub is_favorite: bool,
}

/// Centered message shown in place of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesPanel {
    /// e.g. `"♥ Favorites (3)"`.
    pub title: String,
    pub chips: Vec<FavoriteChip>,
    /// Horizontal translation in columns; negative shifts left.
    pub shift: i32,
    pub hint: String,
    /// Whether keyboard focus is on the favorites pane.
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteChip {
    pub label: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    pub title: String,
    pub overview: String,
    /// e.g. `"★ Rating: 7.4 | Release: Mar 14, 2024"`.
    pub info: String,
    pub poster_url: Option<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub options: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeLine {
    pub level: NoticeLevel,
    pub text: String,
}
