//! Light/dark mode switch.
//!
//! DESIGN
//! ======
//! The button flips the theme signal and delegates persistence plus DOM
//! attribute updates to `util::dark_mode`, so every caller observes the
//! same stored preference.

use leptos::prelude::*;

use crate::state::theme::Theme;

/// Button toggling between light and dark themes.
#[component]
pub fn ThemeToggle(theme: RwSignal<Theme>) -> impl IntoView {
    let on_toggle = move |_| {
        let next = crate::util::dark_mode::toggle(theme.get());
        theme.set(next);
    };

    view! {
        <button
            class="btn theme-toggle"
            title="Toggle dark mode"
            aria-label=move || {
                if theme.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=on_toggle
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
