//! Dark mode initialization and toggle.
//!
//! Reads the operator's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser
//! environment; native builds no-op so callers stay testable.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "raffle_wheel_dark";

/// Read the theme preference from localStorage.
///
/// Returns [`Theme::Dark`] if the operator previously enabled dark mode,
/// or if the system prefers dark mode and no preference is stored.
#[must_use]
pub fn read_preference() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Theme::Light,
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return if val == "true" { Theme::Dark } else { Theme::Light };
            }
        }

        // Fall back to system preference.
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(Theme::Light, |mq| if mq.matches() { Theme::Dark } else { Theme::Light })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Theme::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.attribute());
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme and persist the new preference to localStorage.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next.is_dark() { "true" } else { "false" });
            }
        }
    }
    next
}
