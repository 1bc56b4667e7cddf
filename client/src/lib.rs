//! # client
//!
//! Leptos + WASM frontend for the raffle drawing tool. Renders the lottery
//! screen over the `raffle` crate's draw engine: two sidebars of drawn
//! participants, the spinning wheel with its completion timer, a theme
//! toggle, and the results export.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Boot the client: install the panic hook and logger, then mount the app.
pub fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");
        log::info!("Starting Raffle Wheel (WASM)");
        leptos::mount::mount_to_body(app::App);
    }
}
