use crate::dom;
use crate::i18n::t;
use gloo::timers::callback::Timeout;
use tokokue_core::{CONTACT_SEND_MS, ContactField, ContactState, Notice};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_sent: Callback<Notice>,
}

fn event_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

fn field_input(state: &UseStateHandle<ContactState>, field: ContactField) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(value) = event_value(&e) {
            let mut next = (*state).clone();
            next.set_field(field, value);
            state.set(next);
        }
    })
}

/// Contact form with a simulated send: no request is made and every
/// submission succeeds after a short delay.
#[function_component(ContactForm)]
pub fn contact_form(p: &Props) -> Html {
    let state = use_state(ContactState::new);
    let timer = use_mut_ref(|| None::<Timeout>);

    {
        let timer = timer.clone();
        use_effect_with((), move |()| move || drop(timer.borrow_mut().take()));
    }

    let onsubmit = {
        let state = state.clone();
        let timer = timer.clone();
        let on_sent = p.on_sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut sending = (*state).clone();
            if !sending.submit() {
                return;
            }
            state.set(sending.clone());

            let state = state.clone();
            let on_sent = on_sent.clone();
            *timer.borrow_mut() = Some(Timeout::new(CONTACT_SEND_MS, move || {
                let mut done = sending;
                if let Some(notice) = done.complete() {
                    state.set(done);
                    dom::refresh_icons();
                    on_sent.emit(notice);
                }
            }));
        })
    };

    let form = &state.form;
    let sending = state.is_sending();
    let submit_label = if sending {
        t("contact.sending")
    } else {
        t("contact.submit")
    };

    html! {
        <section id="contact" class="contact">
            <h2>{ t("contact.title") }</h2>
            <form id="contact-form" {onsubmit}>
                <div class="input-group">
                    <i data-feather="user"></i>
                    <input
                        type="text"
                        name="name"
                        placeholder={t("contact.name")}
                        value={form.name.clone()}
                        oninput={field_input(&state, ContactField::Name)}
                    />
                </div>
                <div class="input-group">
                    <i data-feather="mail"></i>
                    <input
                        type="email"
                        name="email"
                        placeholder={t("contact.email")}
                        value={form.email.clone()}
                        oninput={field_input(&state, ContactField::Email)}
                    />
                </div>
                <div class="input-group">
                    <i data-feather="phone"></i>
                    <input
                        type="tel"
                        name="phone"
                        placeholder={t("contact.phone")}
                        value={form.phone.clone()}
                        oninput={field_input(&state, ContactField::Phone)}
                    />
                </div>
                <div class="input-group">
                    <textarea
                        name="message"
                        placeholder={t("contact.message")}
                        value={form.message.clone()}
                        oninput={field_input(&state, ContactField::Message)}
                    />
                </div>
                <button type="submit" class="btn" disabled={sending}>{ submit_label }</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn idle_form_shows_submit_label() {
        let props = Props {
            on_sent: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ContactForm>::with_props(props).render());
        assert!(html.contains("contact-form"));
        assert!(html.contains("Kirim Pesan"));
        assert!(!html.contains("Mengirim..."));
        assert!(!html.contains("disabled"));
    }
}
