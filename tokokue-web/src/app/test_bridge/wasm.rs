use super::shared::BridgeSnapshot;
use crate::app::state::{AppState, ToastState};
use crate::dom;
use crate::storage::WebCartStorage;
use tokokue_core::{CART_STORAGE_KEY, CartStorage, CartStore, SearchFilter};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

struct BridgeBindings {
    _state: Closure<dyn FnMut() -> JsValue>,
    _reset: Closure<dyn FnMut()>,
}

fn test_mode_enabled() -> bool {
    dom::window()
        .and_then(|win| win.location().search().ok())
        .is_some_and(|search| search.contains("test=1"))
}

fn toast_contents() -> (Option<String>, bool) {
    let Some(toast) = dom::document().and_then(|doc| doc.get_element_by_id("notification-toast"))
    else {
        return (None, false);
    };
    let visible = toast.class_list().contains("show");
    let text = dom::document()
        .and_then(|doc| doc.get_element_by_id("notification-message"))
        .and_then(|el| el.text_content());
    (text, visible)
}

fn snapshot() -> JsValue {
    let raw = WebCartStorage.get_item(CART_STORAGE_KEY).ok().flatten();
    let (text, visible) = toast_contents();
    let snapshot = BridgeSnapshot::from_parts(raw.as_deref(), text, visible);
    serde_json::to_string(&snapshot)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}

fn reset(state: &AppState) {
    if let Err(err) = WebCartStorage.remove_item(CART_STORAGE_KEY) {
        log::warn!("test bridge reset: {err}");
    }
    state.cancel_search_restore();
    let mut store = CartStore::new(WebCartStorage);
    store.initialize();
    state.store.set(store);
    state.search.set(SearchFilter::new());
    state.toast.set(ToastState::default());
    state.cart_open.set(false);
    state.nav_open.set(false);
    state.search_visible.set(false);
}

fn build_bridge(state: &AppState) -> BridgeBindings {
    let state_fn = Closure::wrap(Box::new(snapshot) as Box<dyn FnMut() -> JsValue>);

    let reset_state = state.clone();
    let reset_fn = Closure::wrap(Box::new(move || reset(&reset_state)) as Box<dyn FnMut()>);

    BridgeBindings {
        _state: state_fn,
        _reset: reset_fn,
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let Some(window) = dom::window() else {
        return;
    };
    let bridge = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("state"),
        bindings._state.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("reset"),
        bindings._reset.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__tokoKueTest"), &bridge);
}

#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let state = app_state.clone();

    use_effect_with((), move |()| {
        if test_mode_enabled() {
            let bindings = build_bridge(&state);
            attach_bridge(&bindings);
            *bridge_handle.borrow_mut() = Some(bindings);
        }
        || {}
    });
}
