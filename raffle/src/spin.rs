//! The spin phase state machine.
//!
//! A draw is a two-step affair: the engine enters `Spinning` when a draw is
//! requested, the host runs the wheel animation for the fixed spin duration,
//! and the completion callback returns the engine to `Idle` while performing
//! the actual selection. The phase is the guard that keeps draw requests
//! from overlapping.

#[cfg(test)]
#[path = "spin_test.rs"]
mod spin_test;

/// Phase of the spin animation between a draw request and its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPhase {
    /// No spin in progress; waiting for the next draw request.
    #[default]
    Idle,
    /// The wheel animation is running; a completion callback is pending.
    Spinning,
}

impl SpinPhase {
    /// Whether a spin is currently in progress.
    #[must_use]
    pub fn is_spinning(self) -> bool {
        matches!(self, Self::Spinning)
    }
}
