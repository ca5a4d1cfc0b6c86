use crate::i18n::t;
use yew::prelude::*;

pub const NAVBAR_ID: &str = "navbar-nav";
pub const HAMBURGER_ID: &str = "hamburger-menu";
pub const SEARCH_ICON_ID: &str = "search";
pub const CART_ICON_ID: &str = "shopping-cart";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub nav_open: bool,
    pub item_count: u32,
    pub on_toggle_nav: Callback<()>,
    pub on_toggle_search: Callback<()>,
    pub on_open_cart: Callback<()>,
}

fn link_action(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        cb.emit(());
    })
}

#[function_component(Navbar)]
pub fn navbar(p: &Props) -> Html {
    let on_hamburger = link_action(&p.on_toggle_nav);
    let on_search = link_action(&p.on_toggle_search);
    let on_cart = link_action(&p.on_open_cart);

    html! {
        <nav class="navbar">
            <a href="#" class="navbar-logo">{ "Cake" }<span>{ "Castle" }</span></a>
            <div id={NAVBAR_ID} class={classes!("navbar-nav", p.nav_open.then_some("active"))}>
                <a href="#home">{ t("nav.home") }</a>
                <a href="#about">{ t("nav.about") }</a>
                <a href="#menu">{ t("nav.menu") }</a>
                <a href="#contact">{ t("nav.contact") }</a>
            </div>
            <div class="navbar-extra">
                <a href="#" id={SEARCH_ICON_ID} aria-label={t("nav.search")} onclick={on_search}>
                    <i data-feather="search"></i>
                </a>
                <a href="#" id={CART_ICON_ID} aria-label={t("nav.cart")} onclick={on_cart}>
                    <i data-feather="shopping-cart"></i>
                    if p.item_count > 0 {
                        <span class="cart-badge">{ p.item_count }</span>
                    }
                </a>
                <a href="#" id={HAMBURGER_ID} aria-label={t("nav.toggle")} aria-expanded={p.nav_open.to_string()} onclick={on_hamburger}>
                    <i data-feather="menu"></i>
                </a>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(nav_open: bool, item_count: u32) -> Props {
        Props {
            nav_open,
            item_count,
            on_toggle_nav: Callback::noop(),
            on_toggle_search: Callback::noop(),
            on_open_cart: Callback::noop(),
        }
    }

    #[test]
    fn closed_navbar_has_no_active_class_or_badge() {
        let html = block_on(LocalServerRenderer::<Navbar>::with_props(props(false, 0)).render());
        assert!(html.contains("navbar-nav"));
        assert!(!html.contains("active"));
        assert!(!html.contains("cart-badge"));
    }

    #[test]
    fn open_navbar_shows_active_and_badge() {
        let html = block_on(LocalServerRenderer::<Navbar>::with_props(props(true, 3)).render());
        assert!(html.contains("navbar-nav active"));
        assert!(html.contains("cart-badge"));
        assert!(html.contains(">3<"));
    }
}
