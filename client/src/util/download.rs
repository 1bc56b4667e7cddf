//! Browser file-save helper for result exports.
//!
//! Builds a Blob from serialized text, publishes it under a temporary
//! object URL, and clicks an invisible anchor to trigger the download.
//! Every JS-side failure is mapped to a plain string so the page can
//! surface it without panicking.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

/// Save `content` as a local file download named `filename`.
///
/// # Errors
///
/// Returns a human-readable message when the browser environment is
/// missing or any DOM/Blob call fails. Native builds always fail: there
/// is no document to click through.
pub fn save_text(filename: &str, content: &str, mime_type: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or("no window available")?;
        let document = window.document().ok_or("no document available")?;

        let blob_parts = js_sys::Array::new();
        blob_parts.push(&JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
            .map_err(|e| describe("failed to create blob", &e))?;

        // Build the anchor before the object URL: nothing fallible may run
        // between URL creation and the revoke, or an early return leaks it.
        let anchor = document
            .create_element("a")
            .map_err(|e| describe("failed to create anchor", &e))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor element has unexpected type".to_owned())?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| describe("failed to create object URL", &e))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (filename, content, mime_type);
        Err("file downloads require a browser".to_owned())
    }
}

#[cfg(target_arch = "wasm32")]
fn describe(context: &str, err: &JsValue) -> String {
    err.as_string()
        .map_or_else(|| format!("{context}: {err:?}"), |msg| format!("{context}: {msg}"))
}
