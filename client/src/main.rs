//! Binary entry point for the Trunk-served WASM build.

fn main() {
    client::run();
}
