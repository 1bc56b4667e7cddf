//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (localStorage,
//! Blob downloads, `Math.random`) from page and component logic so the
//! rest of the client stays natively testable.

pub mod dark_mode;
pub mod download;
pub mod random;
