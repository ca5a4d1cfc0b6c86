use gloo::timers::callback::Timeout;
use tokokue_core::NOTIFICATION_HIDE_MS;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
    pub visible: bool,
    /// Changes on every notification; restarts the hide timer.
    pub seq: u32,
    pub on_hide: Callback<()>,
}

/// Transient notification. Each new message replaces the pending hide timer.
#[function_component(Toast)]
pub fn toast(p: &Props) -> Html {
    {
        let on_hide = p.on_hide.clone();
        use_effect_with((p.seq, p.visible), move |(_, visible)| {
            let timer =
                visible.then(|| Timeout::new(NOTIFICATION_HIDE_MS, move || on_hide.emit(())));
            move || drop(timer)
        });
    }

    html! {
        <div
            id="notification-toast"
            class={classes!("notification-toast", p.visible.then_some("show"))}
            role="status"
            aria-live="polite"
        >
            <p id="notification-message">{ p.message.clone() }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn shows_message_when_visible() {
        let props = Props {
            message: AttrValue::from("Keranjang telah dikosongkan"),
            visible: true,
            seq: 1,
            on_hide: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Toast>::with_props(props).render());
        assert!(html.contains("notification-toast show"));
        assert!(html.contains("Keranjang telah dikosongkan"));
    }
}
