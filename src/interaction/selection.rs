//! Detail overlay selection.
//!
//! The overlay is visible exactly when the selection is
//! [`SelectionState::Open`]; nothing else tracks visibility.

use crate::domain::CatalogItem;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Closed,
    Open(CatalogItem),
}

/// Tracks the single item shown in the detail overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SelectionState::Closed,
        }
    }

    /// Opens `item`, replacing whatever was open. Returns the replaced item.
    pub fn open(&mut self, item: CatalogItem) -> Option<CatalogItem> {
        tracing::debug!(item_id = item.id, "detail opened");
        match std::mem::replace(&mut self.state, SelectionState::Open(item)) {
            SelectionState::Open(previous) => Some(previous),
            SelectionState::Closed => None,
        }
    }

    /// Closes the overlay. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_visible();
        self.state = SelectionState::Closed;
        was_open
    }

    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The open item, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&CatalogItem> {
        match &self.state {
            SelectionState::Open(item) => Some(item),
            SelectionState::Closed => None,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.state, SelectionState::Open(_))
    }
}
