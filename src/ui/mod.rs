//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled output through composable
//! rendering components, with theme support and a layout shared with mouse
//! hit-testing.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//!                     ↑
//!                  Layout (also used to hit-test pointer events)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Screen geometry for a viewport
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Width-aware text utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Layout, Viewport};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ConfirmDialog, DetailOverlay, DisplayItem, EmptyState, FavoriteChip, FavoritesPanel,
    FooterInfo, HeaderInfo, ListBody, NoticeLine, UIViewModel,
};
