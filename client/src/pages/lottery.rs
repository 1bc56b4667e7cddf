//! Main draw screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-level signals (draw engine, theme, export errors) and
//! wires engine transitions to the UI: the draw trigger starts a spin,
//! the wheel's completion callback lands the pick, and the sidebars and
//! progress line re-derive from engine state. Components below this page
//! receive everything as props.

#[cfg(test)]
#[path = "lottery_test.rs"]
mod lottery_test;

use leptos::prelude::*;
use raffle::engine::DrawEngine;
use raffle::export::ResultsDocument;
use raffle::roster::Participant;

use crate::components::drawn_sidebar::{DrawnSidebar, SidebarSide};
use crate::components::spinning_wheel::SpinningWheel;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::Theme;
use crate::util::download;
use crate::util::random::MathSampler;

/// Draw slots shown per sidebar rail.
const SIDEBAR_SLOTS: usize = 16;

/// Download name for the exported results file.
const RESULTS_FILE_NAME: &str = "raffle-results.csv";

/// Full draw screen: sidebars, stage, trigger, and export controls.
#[component]
pub fn LotteryPage(
    engine: RwSignal<DrawEngine>,
    theme: RwSignal<Theme>,
    event_name: &'static str,
) -> impl IntoView {
    let export_error = RwSignal::new(None::<String>);

    let left = Signal::derive(move || sidebar_slice(engine.get().drawn(), SidebarSide::Left));
    let right = Signal::derive(move || sidebar_slice(engine.get().drawn(), SidebarSide::Right));

    let on_draw = move |_| {
        engine.update(|e| {
            if e.request_draw() {
                log::info!("draw {} of {} started", e.drawn().len() + 1, e.target());
            }
        });
    };

    let on_spin_complete = Callback::new(move |_| {
        engine.update(|e| {
            if let Some(winner) = e.complete_draw(&mut MathSampler) {
                log::info!("drew {} ({})", winner.name, winner.registration);
            }
        });
    });

    let on_export = move |_| {
        let snapshot = engine.get();
        let document = ResultsDocument::new(event_name, snapshot.drawn());
        match download::save_text(RESULTS_FILE_NAME, &document.to_csv(), "text/csv") {
            Ok(()) => export_error.set(None),
            Err(err) => {
                log::error!("results export failed: {err}");
                export_error.set(Some(format!("Export failed: {err}")));
            }
        }
    };

    view! {
        <div class="lottery">
            <DrawnSidebar participants=left side=SidebarSide::Left/>

            <main class="lottery__stage">
                <div class="lottery__theme-corner">
                    <ThemeToggle theme=theme/>
                </div>

                <h1 class="lottery__title">{event_name}</h1>

                <Show
                    when=move || engine.get().is_spinning()
                    fallback=move || {
                        view! {
                            <div class="lottery__controls">
                                {move || {
                                    engine
                                        .get()
                                        .last_drawn()
                                        .is_some()
                                        .then(|| view! { <RevealCard engine=engine/> })
                                }}

                                <button
                                    class="btn btn--primary lottery__draw"
                                    aria-label="Start draw"
                                    disabled=move || !engine.get().can_draw()
                                    on:click=on_draw
                                >
                                    {move || {
                                        let state = engine.get();
                                        draw_button_label(state.drawn().len(), state.target())
                                    }}
                                </button>

                                {move || {
                                    engine
                                        .get()
                                        .is_complete()
                                        .then(|| {
                                            view! {
                                                <button
                                                    class="btn lottery__export"
                                                    aria-label="Export results"
                                                    on:click=on_export
                                                >
                                                    "Export Results"
                                                </button>
                                            }
                                        })
                                }}

                                {move || {
                                    export_error
                                        .get()
                                        .map(|msg| view! { <p class="lottery__error">{msg}</p> })
                                }}
                            </div>
                        }
                    }
                >
                    <SpinningWheel on_complete=on_spin_complete/>
                </Show>

                <p class="lottery__progress">
                    {move || {
                        let state = engine.get();
                        progress_label(state.drawn().len(), state.target())
                    }}
                </p>
            </main>

            <DrawnSidebar participants=right side=SidebarSide::Right/>
        </div>
    }
}

/// Card revealing the most recent pick between spins.
#[component]
fn RevealCard(engine: RwSignal<DrawEngine>) -> impl IntoView {
    let name = move || engine.get().last_drawn().map(|p| p.name.clone()).unwrap_or_default();
    let registration =
        move || engine.get().last_drawn().map(|p| p.registration.clone()).unwrap_or_default();

    view! {
        <div class="reveal-card">
            <p class="reveal-card__caption">"Drawn"</p>
            <p class="reveal-card__name">{name}</p>
            <p class="reveal-card__registration">{registration}</p>
        </div>
    }
}

fn draw_button_label(drawn: usize, target: usize) -> &'static str {
    if drawn >= target { "Complete" } else { "Draw" }
}

fn progress_label(drawn: usize, target: usize) -> String {
    format!("Drawn: {drawn} / {target}")
}

fn sidebar_slice(drawn: &[Participant], side: SidebarSide) -> Vec<Participant> {
    let skip = match side {
        SidebarSide::Left => 0,
        SidebarSide::Right => SIDEBAR_SLOTS,
    };
    drawn.iter().skip(skip).take(SIDEBAR_SLOTS).cloned().collect()
}
