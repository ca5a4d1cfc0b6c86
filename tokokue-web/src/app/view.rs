use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::cart_panel::CartPanel;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::menu_section::MenuSection;
use crate::components::navbar::Navbar;
use crate::components::search_bar::SearchBar;
use crate::components::toast::Toast;
use crate::i18n::t;
use yew::prelude::*;

pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let store = &*state.store;
    let toast = &*state.toast;

    html! {
        <>
            <Navbar
                nav_open={*state.nav_open}
                item_count={store.item_count()}
                on_toggle_nav={handlers.toggle_nav.clone()}
                on_toggle_search={handlers.toggle_search.clone()}
                on_open_cart={handlers.open_cart.clone()}
            />
            <SearchBar visible={*state.search_visible} on_search={handlers.search.clone()} />
            <CartPanel
                open={*state.cart_open}
                lines={store.lines().to_vec()}
                total={store.total()}
                on_close={handlers.close_cart.clone()}
                on_increment={handlers.increment.clone()}
                on_decrement={handlers.decrement.clone()}
                on_remove={handlers.remove.clone()}
                on_clear={handlers.clear.clone()}
                on_checkout={handlers.checkout.clone()}
            />
            <main id="main">
                <section id="home" class="hero">
                    <div class="content">
                        <h1>{ t("hero.title") }</h1>
                        <p>{ t("hero.subtitle") }</p>
                        <a href="#menu" class="cta">{ t("hero.cta") }</a>
                    </div>
                </section>
                <section id="about" class="about">
                    <h2>{ t("about.title") }</h2>
                    <p>{ t("about.body") }</p>
                </section>
                <MenuSection
                    cards={state.menu.cards.clone()}
                    filter={(*state.search).clone()}
                    on_add={handlers.add_to_cart.clone()}
                />
                <ContactForm on_sent={handlers.notify.clone()} />
            </main>
            <Footer />
            <Toast
                message={toast.message.clone()}
                visible={toast.visible}
                seq={toast.seq}
                on_hide={handlers.hide_toast.clone()}
            />
        </>
    }
}
