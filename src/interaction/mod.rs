//! User-interaction state components.
//!
//! Each component owns a disjoint piece of state and exposes transition
//! methods that report what happened, so the application layer can decide on
//! feedback without re-deriving it.
//!
//! - [`favorites`]: ordered, duplicate-free favorites shortlist
//! - [`selection`]: which item the detail overlay shows
//! - [`gesture`]: swipe-to-clear recognizer with confirmation step

pub mod favorites;
pub mod gesture;
pub mod selection;

pub use favorites::{AddOutcome, FavoritesStore, RemoveOutcome};
pub use gesture::{
    exceeds_activation, GestureClearController, GestureEvent, GesturePhase, GestureState,
    ACTIVATION_THRESHOLD, RELEASE_THRESHOLD,
};
pub use selection::{SelectionController, SelectionState};
