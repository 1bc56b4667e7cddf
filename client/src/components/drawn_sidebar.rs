//! Sidebar listing one half of the drawn participants.
//!
//! DESIGN
//! ======
//! The stage is flanked by two fixed-width rails. Each rail owns a slot
//! range (first sixteen draws on the left, the rest on the right) so a
//! full session reads top-to-bottom, left-to-right.

#[cfg(test)]
#[path = "drawn_sidebar_test.rs"]
mod drawn_sidebar_test;

use leptos::prelude::*;
use raffle::roster::Participant;

/// Which rail a sidebar occupies, and therefore which draw slots it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSide {
    /// Draws 1 through 16.
    Left,
    /// Draws 17 through 32.
    Right,
}

impl SidebarSide {
    /// Human-readable slot range for the sidebar heading.
    pub fn slot_label(self) -> &'static str {
        match self {
            Self::Left => "1-16",
            Self::Right => "17-32",
        }
    }

    fn modifier_class(self) -> &'static str {
        match self {
            Self::Left => "drawn-sidebar--left",
            Self::Right => "drawn-sidebar--right",
        }
    }
}

/// One rail of drawn participants with a slot-range heading.
#[component]
pub fn DrawnSidebar(participants: Signal<Vec<Participant>>, side: SidebarSide) -> impl IntoView {
    view! {
        <aside class=format!("drawn-sidebar {}", side.modifier_class())>
            <h2 class="drawn-sidebar__heading">{format!("Drawn {}", side.slot_label())}</h2>
            <ul class="drawn-sidebar__list">
                {move || {
                    participants
                        .get()
                        .into_iter()
                        .map(|p| {
                            view! {
                                <li class="drawn-sidebar__entry">
                                    <span class="drawn-sidebar__name">{p.name}</span>
                                    <span class="drawn-sidebar__registration">{p.registration}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}
