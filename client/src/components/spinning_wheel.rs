//! Animated wheel shown while a draw is in flight.
//!
//! SYSTEM CONTEXT
//! ==============
//! The ring and pulsing dots are pure CSS animation; the only logic here
//! is a single-shot timer that fires `on_complete` after the spin
//! duration. The timer holds an alive flag cleared by `on_cleanup`, so a
//! wheel unmounted mid-spin never reports a stale completion.

use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
use raffle::consts::SPIN_DURATION_MS;

/// Dots arranged around the wheel rim.
const DOT_COUNT: u32 = 8;

/// Spin animation with a completion callback.
///
/// Mounting the component starts the spin; `on_complete` fires exactly
/// once unless the component is torn down first.
#[component]
pub fn SpinningWheel(on_complete: Callback<()>) -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let duration = std::time::Duration::from_millis(u64::from(SPIN_DURATION_MS));
            gloo_timers::future::sleep(duration).await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                on_complete.run(());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = on_complete;

    let dots = (0..DOT_COUNT)
        .map(|i| {
            let angle = f64::from(i) * std::f64::consts::FRAC_PI_4;
            let top = 50.0 + 40.0 * angle.sin();
            let left = 50.0 + 40.0 * angle.cos();
            let delay_ms = i * 100;
            view! {
                <span
                    class="spinning-wheel__dot"
                    style=format!("top: {top:.2}%; left: {left:.2}%; animation-delay: {delay_ms}ms;")
                ></span>
            }
        })
        .collect_view();

    view! {
        <div class="spinning-wheel">
            <div class="spinning-wheel__ring"></div>
            {dots}
            <p class="spinning-wheel__label">"Drawing..."</p>
        </div>
    }
}
