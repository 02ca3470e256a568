//! Catalog loading.
//!
//! - [`fetcher`]: loading state machine with last-fetch-wins tokens
//! - [`provider`]: the remote list capability and its TMDb implementation

pub mod fetcher;
pub mod provider;

pub use fetcher::{CatalogFetcher, CatalogState, Completion, FetchRequest, RequestToken};
pub use provider::{CatalogProvider, HttpRequest, TmdbProvider};
