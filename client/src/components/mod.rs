//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the draw stage chrome and receive everything they
//! need as props; shared state lives in signals owned by the page.

pub mod drawn_sidebar;
pub mod spinning_wheel;
pub mod theme_toggle;
