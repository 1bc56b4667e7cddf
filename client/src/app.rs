//! Root application component owning the session configuration.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use raffle::consts::PLACEHOLDER_ROSTER_SIZE;
use raffle::engine::DrawEngine;
use raffle::roster;

use crate::pages::lottery::LotteryPage;

/// Event name shown in the stage heading and the export title.
pub const EVENT_NAME: &str = "Year-End Raffle";

/// Root application component.
///
/// Owns the draw engine and theme signals and threads them into the page
/// as explicit properties along with the event configuration; pages and
/// components never reach for ambient state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(crate::util::dark_mode::read_preference());
    crate::util::dark_mode::apply(theme.get_untracked());

    // Placeholder roster until a live registration feed is wired in.
    let roster = roster::placeholder_roster(PLACEHOLDER_ROSTER_SIZE);
    let engine = RwSignal::new(DrawEngine::new(roster));

    view! {
        <Title text="Raffle Wheel"/>
        <LotteryPage engine=engine theme=theme event_name=EVENT_NAME/>
    }
}
