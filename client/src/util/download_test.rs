#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn save_text_fails_without_a_browser() {
    let err = save_text("out.csv", "a,b\n", "text/csv").expect_err("no browser");
    assert_eq!(err, "file downloads require a browser");
}
