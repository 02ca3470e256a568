//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! catalog/interaction/worker layers. It composes the interaction components
//! into one state machine that the view layer reads.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: View-event transitions over the interaction components
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Pane focus and pointer-press state
//! - [`notice`]: User-facing feedback messages
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{handle_event, AppState, Event};
//! use marquee::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::RequestFetch)?;
//! assert_eq!(actions.len(), 1);
//! assert!(state.is_loading());
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod notice;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Pane, PointerPress};
pub use notice::{Notice, NoticeLevel};
pub use state::AppState;
