//! Draw engine and export core for the raffle drawing tool.
//!
//! This crate owns everything that is not presentation: the participant
//! roster, the draw-without-replacement engine with its spin phase and
//! guards, and the results document handed to the export boundary. It has
//! no WASM or browser dependencies so the full draw lifecycle can be
//! exercised in native tests; the `client` crate supplies randomness and
//! timers from the host environment.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::DrawEngine`]: guards, pool derivation, draw append |
//! | [`roster`] | Participant records, placeholder roster, JSON roster parsing |
//! | [`spin`] | The two-state [`spin::SpinPhase`] machine |
//! | [`sampler`] | Uniform index selection seam and deterministic impls |
//! | [`export`] | Results document (title, header, rows) and CSV serialization |
//! | [`consts`] | Shared numeric constants (draw capacity, spin duration) |

pub mod consts;
pub mod engine;
pub mod export;
pub mod roster;
pub mod sampler;
pub mod spin;
