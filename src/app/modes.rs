//! Keyboard focus and pointer-press state.
//!
//! [`Pane`] decides which list the cursor keys move through and what
//! `Enter` means. [`PointerPress`] remembers where the mouse went down so
//! that later hold/release reports can be turned into a drag displacement.

use crate::domain::ItemId;

/// Which list has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// The popular-items list. `Enter` opens detail, `f` favorites.
    #[default]
    Catalog,

    /// The favorites strip. `Enter`/`x` removes the focused favorite.
    Favorites,
}

impl Pane {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Catalog => Self::Favorites,
            Self::Favorites => Self::Catalog,
        }
    }
}

/// A mouse press on the favorites panel that may turn into a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPress {
    /// Column where the button went down.
    pub column: usize,
    /// Favorite under the pointer at press time, if any.
    pub favorite: Option<ItemId>,
}
