//! The draw engine: guards, pool derivation, and the draw-without-replacement
//! selection over the roster.

use crate::consts::DRAW_CAPACITY;
use crate::roster::Participant;
use crate::sampler::IndexSampler;
use crate::spin::SpinPhase;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core draw state for one raffle session.
///
/// Owns the immutable roster, the ordered drawn list, and the spin phase.
/// The undrawn pool is never stored; it is derived from roster minus drawn
/// list (by registration) each time it is needed. Free of WASM/browser
/// dependencies so the whole draw lifecycle is testable natively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawEngine {
    roster: Vec<Participant>,
    drawn: Vec<Participant>,
    phase: SpinPhase,
}

impl DrawEngine {
    /// Create an engine over the given roster. The roster is fixed for the
    /// session; the drawn list starts empty.
    #[must_use]
    pub fn new(roster: Vec<Participant>) -> Self {
        Self { roster, drawn: Vec::new(), phase: SpinPhase::Idle }
    }

    // --- Draw lifecycle ---

    /// Request a draw. No-op returning `false` unless the phase is idle,
    /// the drawn list is under capacity, and the pool is non-empty; on
    /// success the phase becomes [`SpinPhase::Spinning`] and the caller is
    /// expected to invoke [`Self::complete_draw`] once the spin elapses.
    pub fn request_draw(&mut self) -> bool {
        if !self.can_draw() {
            return false;
        }
        self.phase = SpinPhase::Spinning;
        true
    }

    /// Complete a spin: return to idle, then select one participant
    /// uniformly from the pool via `sampler` and append it to the drawn
    /// list. Returns the winner, or `None` when the capacity is reached or
    /// the pool is empty (in which case the drawn list is untouched).
    pub fn complete_draw(&mut self, sampler: &mut impl IndexSampler) -> Option<Participant> {
        // The spin ends whatever the guards below decide.
        self.phase = SpinPhase::Idle;

        if self.drawn.len() >= DRAW_CAPACITY {
            return None;
        }

        let winner = {
            let pool = self.pool();
            if pool.is_empty() {
                return None;
            }
            // Clamp rather than trust the sampler to stay in bounds.
            let index = sampler.pick(pool.len()).min(pool.len() - 1);
            pool[index].clone()
        };

        self.drawn.push(winner.clone());
        Some(winner)
    }

    // --- Queries ---

    /// The full roster, in source order.
    #[must_use]
    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    /// Participants drawn so far, in draw order.
    #[must_use]
    pub fn drawn(&self) -> &[Participant] {
        &self.drawn
    }

    /// The most recently drawn participant, if any.
    #[must_use]
    pub fn last_drawn(&self) -> Option<&Participant> {
        self.drawn.last()
    }

    /// Participants not yet drawn, derived as roster minus drawn list by
    /// registration. Roster order is preserved.
    #[must_use]
    pub fn pool(&self) -> Vec<&Participant> {
        self.roster
            .iter()
            .filter(|p| !self.is_drawn(&p.registration))
            .collect()
    }

    /// The current spin phase.
    #[must_use]
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Whether a spin is currently in progress.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.phase.is_spinning()
    }

    /// Number of draws this session will perform: the capacity, or the
    /// roster size when the roster is smaller.
    #[must_use]
    pub fn target(&self) -> usize {
        self.roster.len().min(DRAW_CAPACITY)
    }

    /// Whether every draw of the session has been performed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.drawn.len() >= self.target()
    }

    /// Whether a draw request would currently succeed.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.phase.is_spinning()
            && self.drawn.len() < DRAW_CAPACITY
            && !self.pool_is_empty()
    }

    fn is_drawn(&self, registration: &str) -> bool {
        self.drawn.iter().any(|p| p.registration == registration)
    }

    fn pool_is_empty(&self) -> bool {
        self.roster
            .iter()
            .all(|p| self.is_drawn(&p.registration))
    }
}
