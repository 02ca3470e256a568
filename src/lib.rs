//! Marquee: a Zellij plugin for browsing a popular-movies catalog.
//!
//! Marquee loads one page of a remote catalog, lets the user open any entry
//! in a detail overlay, keeps a session-only shortlist of favorites, and
//! clears that shortlist with a swipe-left gesture confirmed by a dialog.

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - key/mouse mapping, web requests, worker IPC      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and arbitration                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌─────────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Interaction     │   │ Worker Layer  │
//! │ (ui/)         │   │ (interaction/)  │   │ (worker/)     │
//! │ - Rendering   │   │ - Favorites     │   │ - Decoding    │
//! │ - Theming     │   │ - Selection     │   │ - IPC bridge  │
//! │ - Layout      │   │ - Swipe gesture │   │               │
//! └───────────────┘   └─────────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog (catalog/) and Domain (domain/)            │
//! │  - Fetch state with last-fetch-wins tokens          │
//! │  - Provider abstraction (TMDb)                      │
//! │  - CatalogItem, errors                              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a JSON-lines file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/marquee.wasm" {
//!         api_key "your-tmdb-key"
//!         language "en-US"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use marquee::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     api_key: Some("key".to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::RequestFetch)?;
//! assert!(matches!(actions[0], Action::FetchCatalog(_)));
//! assert!(state.is_loading());
//! # Ok::<(), marquee::MarqueeError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Tests**: run natively; the library never calls the Zellij host API

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod interaction;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Notice, NoticeLevel, Pane};
pub use catalog::{CatalogFetcher, CatalogProvider, CatalogState, RequestToken, TmdbProvider};
pub use domain::{CatalogItem, ItemId, MarqueeError, Result};
pub use interaction::{FavoritesStore, GestureClearController, SelectionController};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/marquee.wasm" {
///     api_key "your-tmdb-key"
///     api_base "https://api.themoviedb.org/3"
///     image_base "https://image.tmdb.org/t/p/w500"
///     language "en-US"
///     page "1"
///     drag_units "5"
///     theme "catppuccin-mocha"
///     theme_file "~/themes/custom.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TMDb API key. Without one the catalog request is rejected.
    pub api_key: Option<String>,

    /// Catalog service base URL.
    pub api_base: String,

    /// Prefix joined with poster paths.
    pub image_base: String,

    pub language: String,

    /// Catalog page to load, starting at 1.
    pub page: u32,

    /// Gesture units per terminal column of pointer travel.
    pub drag_units: i32,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` is expanded.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: catalog::provider::DEFAULT_API_BASE.to_string(),
            image_base: app::state::DEFAULT_IMAGE_BASE.to_string(),
            language: catalog::provider::DEFAULT_LANGUAGE.to_string(),
            page: 1,
            drag_units: app::state::DEFAULT_DRAG_UNITS,
            theme_name: None,
            theme_file: None,
            trace_level: app::state::DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Blank strings count as absent, and numbers
    /// that fail to parse or fall outside their range (`page >= 1`,
    /// `1..=100` for `drag_units`) fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use marquee::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "abc".to_string());
    /// map.insert("page".to_string(), "3".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("abc"));
    /// assert_eq!(config.page, 3);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let page = text("page")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(defaults.page);

        let drag_units = text("drag_units")
            .and_then(|s| s.parse::<i32>().ok())
            .filter(|units| (1..=app::state::MAX_DRAG_UNITS).contains(units))
            .unwrap_or(defaults.drag_units);

        Self {
            api_key: text("api_key"),
            api_base: text("api_base").unwrap_or(defaults.api_base),
            image_base: text("image_base").unwrap_or(defaults.image_base),
            language: text("language").unwrap_or(defaults.language),
            page,
            drag_units,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Resolves the configured theme: file first, then name, then default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                }
            }
        } else if let Some(theme_name) = &self.theme_name {
            match Theme::from_name(theme_name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme_name = %theme_name, "unknown theme, using default"),
            }
        }
        Theme::default()
    }
}

/// Builds the initial application state from configuration.
///
/// Nothing is fetched here; the plugin issues the first fetch once the host
/// grants web access. A missing API key is reported as a warning notice.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing marquee plugin");

    let mut state = AppState::new(config.resolve_theme());
    state.catalog = CatalogFetcher::new(config.page);
    state.drag_units = config.drag_units;
    state.image_base.clone_from(&config.image_base);
    state.trace_level.clone_from(&config.trace_level);

    if config.api_key.is_none() {
        tracing::warn!("no api_key configured");
        state.notice = Some(Notice::missing_api_key());
    }

    state
}
