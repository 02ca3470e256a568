//! Swipe-to-clear gesture recognition.
//!
//! A horizontal drag on the favorites panel becomes a gesture once the
//! pointer has moved more than [`ACTIVATION_THRESHOLD`] units from where it
//! was pressed, in either direction. From then on [`GestureState::offset`]
//! follows the pointer so the panel can be drawn shifted. Releasing past
//! [`RELEASE_THRESHOLD`] asks for confirmation instead of clearing directly.
//!
//! ```text
//!            |dx| > 20                release dx < -100
//!   Idle ───────────────► Dragging ──────────────────► PendingConfirm
//!    ▲                        │                          │      │
//!    └──── release otherwise ─┘                confirm() │      │ cancel()
//!    └───────────────────────────────────────────────────┴──────┘
//! ```
//!
//! Every release puts the offset back to zero, including the one that
//! requests confirmation.

/// Minimum absolute displacement before a drag is tracked.
pub const ACTIVATION_THRESHOLD: i32 = 20;

/// Release displacement below which a clear is proposed.
pub const RELEASE_THRESHOLD: i32 = -100;

/// Whether a displacement is far enough from the press point to count as a
/// drag. Total over the whole `i32` range.
#[must_use]
pub const fn exceeds_activation(dx: i32) -> bool {
    dx.unsigned_abs() > ACTIVATION_THRESHOLD.unsigned_abs()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    PendingConfirm,
}

/// Gesture phase plus the current horizontal displacement of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureState {
    pub phase: GesturePhase,
    pub offset: i32,
}

/// Discrete events emitted by the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// The user swiped far enough left; ask before clearing favorites.
    RequestConfirmClear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureClearController {
    state: GestureState,
}

impl GestureClearController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: GestureState {
                phase: GesturePhase::Idle,
                offset: 0,
            },
        }
    }

    /// Feeds the total displacement `dx` since the pointer went down.
    ///
    /// Returns `true` when the offset changed and the panel needs redrawing.
    /// Ignored while a confirmation is pending.
    pub fn drag_move(&mut self, dx: i32) -> bool {
        match self.state.phase {
            GesturePhase::PendingConfirm => {
                tracing::debug!(dx = dx, "drag ignored while confirmation is pending");
                false
            }
            GesturePhase::Idle if !exceeds_activation(dx) => false,
            GesturePhase::Idle => {
                tracing::debug!(dx = dx, "swipe gesture activated");
                self.state = GestureState {
                    phase: GesturePhase::Dragging,
                    offset: dx,
                };
                true
            }
            GesturePhase::Dragging => {
                let changed = self.state.offset != dx;
                self.state.offset = dx;
                changed
            }
        }
    }

    /// Ends the gesture at final displacement `dx`.
    ///
    /// A release that never crossed the activation threshold is not a
    /// gesture and emits nothing. A release while confirmation is pending is
    /// ignored.
    pub fn release(&mut self, dx: i32) -> Option<GestureEvent> {
        let activated = match self.state.phase {
            GesturePhase::PendingConfirm => {
                tracing::debug!(dx = dx, "release ignored while confirmation is pending");
                return None;
            }
            GesturePhase::Dragging => true,
            GesturePhase::Idle => exceeds_activation(dx),
        };

        self.state.offset = 0;

        if activated && dx < RELEASE_THRESHOLD {
            tracing::debug!(dx = dx, "swipe released past threshold, requesting confirmation");
            self.state.phase = GesturePhase::PendingConfirm;
            Some(GestureEvent::RequestConfirmClear)
        } else {
            self.state.phase = GesturePhase::Idle;
            None
        }
    }

    /// Accepts the pending clear. Returns `true` if one was pending, in
    /// which case the caller must clear the favorites.
    pub fn confirm(&mut self) -> bool {
        self.resolve("confirmed")
    }

    /// Rejects the pending clear. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.resolve("cancelled")
    }

    fn resolve(&mut self, decision: &str) -> bool {
        if self.state.phase != GesturePhase::PendingConfirm {
            return false;
        }
        tracing::debug!(decision = decision, "clear confirmation resolved");
        self.state = GestureState::default();
        true
    }

    #[must_use]
    pub const fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.state.offset
    }

    #[must_use]
    pub fn is_pending_confirm(&self) -> bool {
        self.state.phase == GesturePhase::PendingConfirm
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.phase == GesturePhase::Dragging
    }
}
