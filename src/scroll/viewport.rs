use log::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn inner_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn inner_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Largest reachable scroll offset of the document.
pub fn max_scroll() -> f64 {
    let height = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    height - inner_height()
}

/// Document offset of a section's top edge.
pub fn section_top(id: &str) -> Option<f64> {
    let element = element_by_id(id)?;
    Some(element.get_bounding_client_rect().top() + scroll_y())
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_into_view(id: &str) {
    match element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id '{}' to scroll to", id),
    }
}

/// Locks or releases page scrolling under an overlay.
pub fn set_body_scroll_locked(locked: bool) {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            warn!("Could not open {}", url);
        }
    }
}

/// Resolves on the next animation frame.
pub async fn next_frame() {
    let promise = web_sys::js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = window() {
            if window.request_animation_frame(&resolve).is_ok() {
                return;
            }
        }
        let _ = resolve.call0(&JsValue::NULL);
    });
    let _ = JsFuture::from(promise).await;
}
