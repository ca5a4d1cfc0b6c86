use crate::app::state::AppState;
use yew::prelude::*;

/// Server-side renders have no window to attach to.
#[hook]
pub fn use_test_bridge(_state: &AppState) {}

#[cfg(test)]
mod tests {
    use super::use_test_bridge;
    use crate::app::state::use_app_state;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;
    use yew::prelude::*;

    #[function_component(BridgeProbe)]
    fn bridge_probe() -> Html {
        let state = use_app_state();
        use_test_bridge(&state);
        html! { <span class="probe">{ state.store.item_count() }</span> }
    }

    #[test]
    fn native_render_skips_bridge_and_keeps_empty_cart() {
        let html = block_on(LocalServerRenderer::<BridgeProbe>::new().render());
        assert!(html.contains(r#"<span class="probe">0</span>"#));
    }
}
