//! Browser-backed index sampler for live draws.
//!
//! The draw engine takes any [`IndexSampler`], which keeps the engine
//! deterministic under test. This module supplies the one sampler used
//! in production: `Math.random()` scaled to the pool size.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

use raffle::sampler::IndexSampler;

/// Sampler backed by the browser's `Math.random()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathSampler;

impl IndexSampler for MathSampler {
    #[cfg(target_arch = "wasm32")]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn pick(&mut self, bound: usize) -> usize {
        (js_sys::Math::random() * bound as f64).floor() as usize
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn pick(&mut self, bound: usize) -> usize {
        // No Math.random off-browser; native builds never run a spin.
        let _ = bound;
        0
    }
}
