use crate::dom;
use yew::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;
pub mod test_bridge;
pub mod view;

pub use handlers::AppHandlers;
pub use state::AppState;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    test_bridge::use_test_bridge(&app_state);
    use_effect(dom::refresh_icons);

    let handlers = AppHandlers::new(&app_state);
    view::render_app(&app_state, &handlers)
}

#[cfg(test)]
mod tests {
    use super::App;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_every_section() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        for id in ["navbar-nav", "search-wrapper", "menu", "contact-form", "notification-toast"] {
            assert!(html.contains(id), "missing #{id}");
        }
        assert!(html.contains("Keranjang belanja masih kosong"));
        assert!(html.contains("Red Velvet"));
    }
}
