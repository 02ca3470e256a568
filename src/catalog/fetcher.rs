//! Catalog loading state and last-fetch-wins arbitration.
//!
//! [`CatalogFetcher`] does not perform I/O. [`CatalogFetcher::fetch`] flips the
//! state to [`CatalogState::Loading`] and hands back a [`FetchRequest`] whose
//! token the host attaches to the real request. When the response comes back
//! the host calls [`CatalogFetcher::complete`] with the same token; only the
//! most recently issued token is applied.
//!
//! ```text
//!   fetch() ──► Loading (token n) ──complete(n, Ok)──► Loaded(items)
//!                   │              └─complete(n, Err)─► Failed(reason)
//!                   └─ fetch() ──► Loading (token n+1)   complete(n, _) is stale
//! ```

use crate::domain::{CatalogItem, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically increasing identifier of one catalog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Rebuilds a token from its raw value, e.g. after a round trip through
    /// a request context map.
    #[must_use]
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Loading state of the catalog. Exactly one variant holds at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The latest fetch succeeded.
    Loaded(Vec<CatalogItem>),
    /// The latest fetch failed; the reason is user-facing.
    Failed(String),
}

impl CatalogState {
    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Items to display: the loaded items, or an empty slice otherwise.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        match self {
            Self::Loaded(items) => items,
            Self::Idle | Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// Failure reason, if the latest fetch failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// A request the host must perform on behalf of the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub page: u32,
}

/// What [`CatalogFetcher::complete`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result belonged to the latest request and replaced the state.
    Applied,
    /// The result belonged to a superseded or already applied request and
    /// was discarded.
    Stale,
}

/// Owns [`CatalogState`] and arbitrates overlapping fetches.
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    state: CatalogState,
    page: u32,
    issued: u64,
    pending: Option<RequestToken>,
}

impl CatalogFetcher {
    /// Creates an idle fetcher for the given page. Page numbers start at 1.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self {
            state: CatalogState::Idle,
            page: page.max(1),
            issued: 0,
            pending: None,
        }
    }

    /// Starts a fetch.
    ///
    /// The state becomes [`CatalogState::Loading`] before this returns, and
    /// any outstanding request is superseded: its eventual completion will be
    /// reported as [`Completion::Stale`].
    pub fn fetch(&mut self) -> FetchRequest {
        self.issued += 1;
        let token = RequestToken(self.issued);

        if let Some(previous) = self.pending.replace(token) {
            tracing::debug!(superseded = %previous, token = %token, "catalog fetch superseded");
        }
        self.state = CatalogState::Loading;

        tracing::debug!(token = %token, page = self.page, "catalog fetch started");
        FetchRequest { token, page: self.page }
    }

    /// Applies the result of the request identified by `token`.
    ///
    /// Any error collapses to [`CatalogState::Failed`] carrying the error's
    /// display text.
    pub fn complete(&mut self, token: RequestToken, result: Result<Vec<CatalogItem>>) -> Completion {
        if self.pending != Some(token) {
            tracing::debug!(
                token = %token,
                pending = ?self.pending.map(RequestToken::value),
                "discarding stale catalog result"
            );
            return Completion::Stale;
        }
        self.pending = None;

        self.state = match result {
            Ok(items) => {
                tracing::debug!(token = %token, item_count = items.len(), "catalog loaded");
                CatalogState::Loaded(items)
            }
            Err(e) => {
                tracing::warn!(token = %token, error = %e, "catalog fetch failed");
                CatalogState::Failed(e.to_string())
            }
        };
        Completion::Applied
    }

    /// Current loading state.
    #[must_use]
    pub const fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Page this fetcher requests.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Token of the outstanding request, if any.
    #[must_use]
    pub const fn pending_token(&self) -> Option<RequestToken> {
        self.pending
    }
}

impl Default for CatalogFetcher {
    fn default() -> Self {
        Self::new(1)
    }
}
