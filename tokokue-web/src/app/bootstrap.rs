use crate::app::state::{AppState, WebCartStore};
use crate::components::navbar::{HAMBURGER_ID, NAVBAR_ID, SEARCH_ICON_ID};
use crate::components::search_bar::SEARCH_WRAPPER_ID;
use crate::dom;
use tokokue_core::Hydration;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// Restore the persisted cart into `store`. Returns what hydration did.
pub fn hydrate(store: &UseStateHandle<WebCartStore>) -> Hydration {
    let mut next = (**store).clone();
    let hydration = next.initialize();
    if hydration != Hydration::AlreadyHydrated {
        store.set(next);
    }
    hydration
}

fn target_within(target: &web_sys::Node, ids: &[&str]) -> bool {
    let Some(doc) = dom::document() else {
        return false;
    };
    ids.iter()
        .filter_map(|id| doc.get_element_by_id(id))
        .any(|el| el.contains(Some(target)))
}

/// Hydrate the cart once on mount and close the navigation panel and search
/// box on clicks outside them.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let store = app_state.store.clone();
    let nav_open = app_state.nav_open.clone();
    let search_visible = app_state.search_visible.clone();

    use_effect_with((), move |()| {
        let hydration = hydrate(&store);
        log::debug!("cart hydration: {hydration:?}");

        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            else {
                return;
            };
            if !target_within(&target, &[HAMBURGER_ID, NAVBAR_ID]) {
                nav_open.set(false);
            }
            if !target_within(&target, &[SEARCH_ICON_ID, SEARCH_WRAPPER_ID]) {
                search_visible.set(false);
            }
        });

        let doc = dom::document();
        if let Some(doc) = &doc {
            if let Err(err) =
                doc.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                log::warn!("outside-click listener failed: {}", dom::js_error_message(&err));
            }
        }

        move || {
            if let Some(doc) = doc {
                if let Err(err) = doc
                    .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                {
                    log::warn!(
                        "outside-click listener removal failed: {}",
                        dom::js_error_message(&err)
                    );
                }
            }
        }
    });
}
