use crate::i18n::t;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const SEARCH_WRAPPER_ID: &str = "search-wrapper";
pub const SEARCH_INPUT_ID: &str = "search-input";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(p: &Props) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with(p.visible, move |visible| {
            if *visible {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
            || {}
        });
    }

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_search = p.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            on_search.emit(query);
        })
    };

    html! {
        <div id={SEARCH_WRAPPER_ID} class={classes!("search-wrapper", p.visible.then_some("visible"))}>
            <form id="search-form" {onsubmit}>
                <input
                    ref={input_ref}
                    type="search"
                    id={SEARCH_INPUT_ID}
                    placeholder={t("search.placeholder")}
                    autocomplete="off"
                />
                <button type="submit" aria-label={t("search.submit")}>
                    <i data-feather="search"></i>
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn visibility_toggles_class() {
        let hidden = Props {
            visible: false,
            on_search: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SearchBar>::with_props(hidden).render());
        assert!(html.contains("search-input"));
        assert!(!html.contains("search-wrapper visible"));

        let shown = Props {
            visible: true,
            on_search: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SearchBar>::with_props(shown).render());
        assert!(html.contains("search-wrapper visible"));
        assert!(html.contains("Cari menu..."));
    }
}
