//! Browser side effects used by the raffle component.
//!
//! - **User Feedback**: transient toast notifications for things that are not
//!   worth a permanent spot on the page (skipped rows, failed exports).
//! - **Downloads**: turning the exported CSV text into a file download through
//!   a temporary object URL and a hidden anchor.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

const CSV_MIME: &str = "text/csv;charset=utf-8;";
const TOAST_MS: u32 = 3000;

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is plain text and removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Offers `content` to the user as a CSV file named `file_name`.
pub fn trigger_download(file_name: &str, content: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let parts = Array::new();
    parts.push(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(file_name);
    link.style().set_property("visibility", "hidden")?;

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)?;

    Ok(())
}
