//! Client-side state types.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session state lives in `RwSignal`s created by `app::App` and passed to
//! pages and components as explicit properties; this module holds the
//! types those signals carry.

pub mod theme;
