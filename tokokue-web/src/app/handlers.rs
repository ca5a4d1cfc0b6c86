use crate::app::state::AppState;
use crate::dom;
use crate::i18n;
use gloo::timers::callback::Timeout;
use tokokue_core::{
    CheckoutOutcome, MenuCard, Notice, SEARCH_RESTORE_MS, SearchFilter, SearchOutcome,
};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub add_to_cart: Callback<MenuCard>,
    pub increment: Callback<String>,
    pub decrement: Callback<String>,
    pub remove: Callback<String>,
    pub clear: Callback<()>,
    pub checkout: Callback<()>,
    pub toggle_nav: Callback<()>,
    pub open_cart: Callback<()>,
    pub close_cart: Callback<()>,
    pub toggle_search: Callback<()>,
    pub search: Callback<String>,
    pub notify: Callback<Notice>,
    pub hide_toast: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            add_to_cart: build_add_to_cart(state),
            increment: build_increment(state),
            decrement: build_decrement(state),
            remove: build_remove(state),
            clear: build_clear(state),
            checkout: build_checkout(state),
            toggle_nav: build_toggle(&state.nav_open),
            open_cart: build_set(&state.cart_open, true),
            close_cart: build_set(&state.cart_open, false),
            toggle_search: build_toggle(&state.search_visible),
            search: build_search(state),
            notify: build_notify(state),
            hide_toast: build_hide_toast(state),
        }
    }
}

fn build_add_to_cart(state: &AppState) -> Callback<MenuCard> {
    let state = state.clone();
    Callback::from(move |card: MenuCard| {
        let mut store = (*state.store).clone();
        let notice = store.add_item(&card.name, card.price, &card.image);
        state.store.set(store);
        state.notify(i18n::render_notice(&notice));
    })
}

fn build_increment(state: &AppState) -> Callback<String> {
    let store_handle = state.store.clone();
    Callback::from(move |name: String| {
        let mut store = (*store_handle).clone();
        if store.increment_quantity(&name).is_some() {
            store_handle.set(store);
        }
    })
}

fn build_decrement(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |name: String| {
        if state.store.cart().find_line(&name).is_none() {
            return;
        }
        let mut store = (*state.store).clone();
        let notice = store.decrement_quantity(&name);
        state.store.set(store);
        if let Some(notice) = notice {
            state.notify(i18n::render_notice(&notice));
        }
    })
}

fn build_remove(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |name: String| {
        let mut store = (*state.store).clone();
        if let Some(notice) = store.remove_item(&name) {
            state.store.set(store);
            state.notify(i18n::render_notice(&notice));
        }
    })
}

fn build_clear(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let mut store = (*state.store).clone();
        let notice = store.clear();
        state.store.set(store);
        state.notify(i18n::render_notice(&notice));
    })
}

fn build_checkout(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let mut store = (*state.store).clone();
        match store.checkout() {
            CheckoutOutcome::Empty { notice } => {
                state.notify(i18n::render_notice(&notice));
            }
            CheckoutOutcome::Completed { notice, .. } => {
                dom::alert(&i18n::render_notice(&Notice::CheckoutThanks));
                state.store.set(store);
                state.notify(i18n::render_notice(&notice));
                state.cart_open.set(false);
            }
        }
    })
}

fn build_toggle(flag: &UseStateHandle<bool>) -> Callback<()> {
    let flag = flag.clone();
    Callback::from(move |()| flag.set(!*flag))
}

fn build_set(flag: &UseStateHandle<bool>, value: bool) -> Callback<()> {
    let flag = flag.clone();
    Callback::from(move |()| flag.set(value))
}

fn build_search(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |query: String| {
        state.cancel_search_restore();
        let mut filter = (*state.search).clone();
        let outcome = filter.apply(&query, state.menu.titles());
        state.search.set(filter);
        match outcome {
            SearchOutcome::Reset => {}
            SearchOutcome::Matched { count } => {
                log::debug!("search {query:?} matched {count} cards");
                dom::scroll_into_view("menu");
                state.search_visible.set(false);
            }
            SearchOutcome::NoResults { notice } => {
                state.notify(i18n::render_notice(&notice));
                let search = state.search.clone();
                *state.search_restore.borrow_mut() = Some(Timeout::new(SEARCH_RESTORE_MS, move || {
                    search.set(SearchFilter::new());
                }));
            }
        }
    })
}

fn build_notify(state: &AppState) -> Callback<Notice> {
    let state = state.clone();
    Callback::from(move |notice: Notice| state.notify(i18n::render_notice(&notice)))
}

fn build_hide_toast(state: &AppState) -> Callback<()> {
    let toast = state.toast.clone();
    Callback::from(move |()| {
        let mut next = (*toast).clone();
        next.visible = false;
        toast.set(next);
    })
}
