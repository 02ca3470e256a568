//! Domain layer for the Marquee plugin.
//!
//! Core types that every other layer shares, independent of Zellij APIs or
//! the catalog provider's transport.
//!
//! # Organization
//!
//! - [`error`]: Error type and result alias
//! - [`item`]: Catalog item model and display helpers

pub mod error;
pub mod item;

pub use error::{MarqueeError, Result};
pub use item::{CatalogItem, ItemId, NO_OVERVIEW};
