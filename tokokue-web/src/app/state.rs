use crate::storage::WebCartStorage;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use tokokue_core::{CartStore, Menu, SearchFilter};
use yew::prelude::*;

pub type WebCartStore = CartStore<WebCartStorage>;

/// What the notification toast is currently showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: AttrValue,
    pub visible: bool,
    /// Bumped on every notification so the toast restarts its hide timer.
    pub seq: u32,
}

#[derive(Clone)]
pub struct AppState {
    pub store: UseStateHandle<WebCartStore>,
    pub menu: UseStateHandle<Menu>,
    pub search: UseStateHandle<SearchFilter>,
    pub toast: UseStateHandle<ToastState>,
    pub nav_open: UseStateHandle<bool>,
    pub cart_open: UseStateHandle<bool>,
    pub search_visible: UseStateHandle<bool>,
    pub search_restore: Rc<RefCell<Option<Timeout>>>,
}

/// Parse the embedded menu catalogue, falling back to an empty menu.
#[must_use]
pub fn load_menu() -> Menu {
    match Menu::from_json(include_str!("../../static/assets/data/menu.json")) {
        Ok(menu) => menu,
        Err(err) => {
            log::error!("failed to load menu: {err}");
            #[cfg(target_arch = "wasm32")]
            crate::dom::console_error(&format!("failed to load menu: {err}"));
            Menu::default()
        }
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        store: use_state(|| CartStore::new(WebCartStorage)),
        menu: use_state(load_menu),
        search: use_state(SearchFilter::new),
        toast: use_state(ToastState::default),
        nav_open: use_state_eq(|| false),
        cart_open: use_state_eq(|| false),
        search_visible: use_state_eq(|| false),
        search_restore: use_mut_ref(|| None::<Timeout>),
    }
}

impl AppState {
    /// Show `message` in the toast, restarting its hide timer.
    pub fn notify(&self, message: String) {
        self.toast.set(ToastState {
            message: AttrValue::from(message),
            visible: true,
            seq: self.toast.seq.wrapping_add(1),
        });
    }

    /// Cancel a pending search restore, if any.
    pub fn cancel_search_restore(&self) {
        self.search_restore.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_menu_parses() {
        let menu = load_menu();
        assert!(!menu.is_empty());
        assert!(menu.find("Red Velvet").is_some_and(|card| card.price == 90_000));
    }

    #[test]
    fn menu_images_ship_with_copied_assets() {
        let static_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        for card in &load_menu().cards {
            assert!(
                card.image.starts_with("assets/"),
                "{} image is outside the copied assets dir: {}",
                card.name,
                card.image
            );
            assert!(
                static_dir.join(&card.image).is_file(),
                "{} image missing: {}",
                card.name,
                card.image
            );
        }
    }

    #[test]
    fn toast_starts_hidden() {
        let toast = ToastState::default();
        assert!(!toast.visible);
        assert_eq!(toast.seq, 0);
    }
}
