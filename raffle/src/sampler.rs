//! Uniform index selection seam.
//!
//! The engine never talks to a randomness source directly: callers hand it
//! an [`IndexSampler`] per completed draw. The browser client backs this
//! with `Math.random`; tests and headless tools use the deterministic
//! implementations below.

#[cfg(test)]
#[path = "sampler_test.rs"]
mod sampler_test;

/// Picks one index from a pool, uniformly at random for production
/// implementations.
pub trait IndexSampler {
    /// Return an index in `[0, bound)`. Callers guarantee `bound >= 1`;
    /// the engine clamps out-of-range picks rather than trusting the
    /// implementation.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Always picks the same index, clamped to the bound. Useful for forcing
/// a specific winner in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl IndexSampler for FixedIndex {
    fn pick(&mut self, bound: usize) -> usize {
        self.0.min(bound.saturating_sub(1))
    }
}

/// Cycles through indices `0, 1, 2, ...`, wrapping at the bound. Spreads
/// picks across the pool deterministically.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    next: usize,
}

impl RoundRobin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexSampler for RoundRobin {
    fn pick(&mut self, bound: usize) -> usize {
        let index = if bound == 0 { 0 } else { self.next % bound };
        self.next += 1;
        index
    }
}
