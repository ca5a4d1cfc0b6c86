use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>
            <div class="socials">
                <a href="#"><i data-feather="instagram"></i></a>
                <a href="#"><i data-feather="facebook"></i></a>
            </div>
            <p>{ t("footer.copyright") }</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn footer_renders_copy() {
        let html = block_on(LocalServerRenderer::<Footer>::new().render());
        assert!(html.contains("<footer>"));
        assert!(html.contains("Cake Castle"));
    }
}
