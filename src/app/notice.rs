//! User-facing feedback messages.
//!
//! At most one notice is shown at a time; a new one replaces the old one and
//! `Esc` dismisses it.

use crate::domain::CatalogItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn favorite_added(item: &CatalogItem) -> Self {
        Self::new(
            NoticeLevel::Success,
            "Added!",
            format!("{} was added to favorites.", item.title),
        )
    }

    #[must_use]
    pub fn already_favorited(item: &CatalogItem) -> Self {
        Self::new(
            NoticeLevel::Warning,
            "Already added",
            format!("{} is already in favorites!", item.title),
        )
    }

    #[must_use]
    pub fn favorite_removed(item: &CatalogItem) -> Self {
        Self::new(
            NoticeLevel::Info,
            "Removed",
            format!("{} removed from favorites.", item.title),
        )
    }

    #[must_use]
    pub fn favorites_cleared(count: usize) -> Self {
        let noun = if count == 1 { "favorite" } else { "favorites" };
        Self::new(NoticeLevel::Info, "Cleared", format!("Removed {count} {noun}."))
    }

    #[must_use]
    pub fn fetch_failed(reason: &str) -> Self {
        Self::new(
            NoticeLevel::Error,
            "Error",
            format!("Failed to load the catalog ({reason}). Press r to retry."),
        )
    }

    #[must_use]
    pub fn missing_api_key() -> Self {
        Self::new(
            NoticeLevel::Warning,
            "No API key",
            "Set api_key in the plugin configuration to load the catalog.",
        )
    }

    /// Single-line rendering, e.g. `"Added! Dune was added to favorites."`.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} {}", self.title, self.message)
    }
}
