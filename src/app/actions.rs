//! Actions representing side effects to be executed by the plugin runtime.
//!
//! [`handle_event`](super::handle_event) never talks to Zellij directly. It
//! mutates [`AppState`](super::AppState) and returns a list of actions; the
//! plugin shim in `main.rs` executes them in order.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{handle_event, Action, AppState, Event};
//! use marquee::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::RequestFetch)?;
//! assert!(matches!(actions[0], Action::FetchCatalog(_)));
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use crate::catalog::FetchRequest;
use crate::worker::WorkerMessage;

/// Commands the plugin runtime executes after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the catalog web request.
    ///
    /// The runtime builds the concrete request with its
    /// [`CatalogProvider`](crate::catalog::CatalogProvider) and must carry
    /// the token in the request context so the response can be matched to
    /// it.
    FetchCatalog(FetchRequest),

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
