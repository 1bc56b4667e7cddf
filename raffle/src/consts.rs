//! Shared numeric constants for the raffle core.

// ── Drawing ─────────────────────────────────────────────────────

/// Maximum number of participants drawn in one session.
pub const DRAW_CAPACITY: usize = 32;

/// Number of entries in the built-in placeholder roster.
pub const PLACEHOLDER_ROSTER_SIZE: usize = 50;

// ── Animation ───────────────────────────────────────────────────

/// Duration of one spin animation, in milliseconds. The completion
/// callback fires exactly once after this interval.
pub const SPIN_DURATION_MS: u32 = 1_000;
