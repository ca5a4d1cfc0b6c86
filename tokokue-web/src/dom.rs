use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log a message to the browser console.
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from(message));
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Show a blocking `window.alert` dialog.
pub fn alert(message: &str) {
    if let Some(win) = window() {
        if let Err(err) = win.alert_with_message(message) {
            log::warn!("alert failed: {}", js_error_message(&err));
        }
    }
}

/// Re-run Feather's icon replacement over `<i data-feather>` placeholders.
///
/// Does nothing when the `feather` global is not loaded.
pub fn refresh_icons() {
    let Some(win) = window() else {
        return;
    };
    let Ok(feather) = js_sys::Reflect::get(&win, &JsValue::from_str("feather")) else {
        return;
    };
    if feather.is_undefined() || feather.is_null() {
        return;
    }
    let replace = js_sys::Reflect::get(&feather, &JsValue::from_str("replace"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok());
    if let Some(replace) = replace {
        if let Err(err) = replace.call0(&feather) {
            log::warn!("feather.replace failed: {}", js_error_message(&err));
        }
    }
}

/// Smoothly scroll the element with `id` into view.
pub fn scroll_into_view(id: &str) {
    let Some(element) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
