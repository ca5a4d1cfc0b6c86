use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use tokokue_core::{CartLine, format_currency};
use yew::prelude::*;

/// Per-line controls, keyed by line name.
#[derive(PartialEq, Clone)]
pub struct LineControls {
    pub on_increment: Callback<String>,
    pub on_decrement: Callback<String>,
    pub on_remove: Callback<String>,
}

fn named_label(key: &str, name: &str) -> String {
    let mut vars = BTreeMap::new();
    vars.insert("name", name);
    tr(key, Some(&vars))
}

fn emit_name(cb: &Callback<String>, name: &str) -> Callback<MouseEvent> {
    let cb = cb.clone();
    let name = name.to_string();
    Callback::from(move |_: MouseEvent| cb.emit(name.clone()))
}

fn render_line(line: &CartLine, controls: &LineControls) -> Html {
    html! {
        <div class="cart-item" key={line.name.clone()}>
            <img src={line.image.clone()} alt={line.name.clone()} class="cart-item-img" />
            <div class="cart-item-details">
                <h3 class="cart-item-title">{ line.name.clone() }</h3>
                <p class="cart-item-price">{ format_currency(line.price) }</p>
                <div class="cart-item-quantity">
                    <button
                        class="quantity-btn decrement"
                        aria-label={named_label("cart.decrement", &line.name)}
                        onclick={emit_name(&controls.on_decrement, &line.name)}
                    >{ "-" }</button>
                    <span class="item-quantity">{ line.quantity }</span>
                    <button
                        class="quantity-btn increment"
                        aria-label={named_label("cart.increment", &line.name)}
                        onclick={emit_name(&controls.on_increment, &line.name)}
                    >{ "+" }</button>
                    <button
                        class="remove-item"
                        aria-label={named_label("cart.remove", &line.name)}
                        onclick={emit_name(&controls.on_remove, &line.name)}
                    >
                        <i data-feather="trash-2"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Render the cart lines, or the empty-cart message when there are none.
#[must_use]
pub fn render_cart_lines(lines: &[CartLine], controls: &LineControls) -> Html {
    if lines.is_empty() {
        return html! { <p class="empty-cart">{ t("cart.empty") }</p> };
    }
    html! {
        <>
            { for lines.iter().map(|line| render_line(line, controls)) }
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub on_close: Callback<()>,
    pub on_increment: Callback<String>,
    pub on_decrement: Callback<String>,
    pub on_remove: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_checkout: Callback<()>,
}

#[function_component(CartPanel)]
pub fn cart_panel(p: &Props) -> Html {
    let controls = LineControls {
        on_increment: p.on_increment.clone(),
        on_decrement: p.on_decrement.clone(),
        on_remove: p.on_remove.clone(),
    };
    let on_close = p.on_close.reform(|_: MouseEvent| ());
    let on_clear = p.on_clear.reform(|_: MouseEvent| ());
    let on_checkout = p.on_checkout.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("shopping-cart-container", p.open.then_some("open"))} aria-hidden={(!p.open).to_string()}>
            <div class="shopping-cart">
                <div class="cart-header">
                    <h2>{ t("cart.title") }</h2>
                    <button id="close-cart" aria-label={t("cart.close")} onclick={on_close}>
                        <i data-feather="x"></i>
                    </button>
                </div>
                <div class="cart-items">
                    { render_cart_lines(&p.lines, &controls) }
                </div>
                <div class="cart-footer">
                    <div class="cart-total">
                        <span>{ t("cart.total") }</span>
                        <span id="cart-total">{ format_currency(p.total) }</span>
                    </div>
                    <button class="checkout-btn" onclick={on_checkout}>{ t("cart.checkout") }</button>
                    <button class="clear-cart-btn" onclick={on_clear}>{ t("cart.clear") }</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(lines: Vec<CartLine>) -> Props {
        let total = lines.iter().map(CartLine::subtotal).sum();
        Props {
            open: true,
            lines,
            total,
            on_close: Callback::noop(),
            on_increment: Callback::noop(),
            on_decrement: Callback::noop(),
            on_remove: Callback::noop(),
            on_clear: Callback::noop(),
            on_checkout: Callback::noop(),
        }
    }

    #[test]
    fn empty_cart_shows_message_and_zero_total() {
        let html = block_on(LocalServerRenderer::<CartPanel>::with_props(props(Vec::new())).render());
        assert!(html.contains("Keranjang belanja masih kosong"));
        assert!(html.contains("IDR 0"));
        assert!(html.contains("shopping-cart-container open"));
    }

    #[test]
    fn lines_render_price_quantity_and_total() {
        let mut red_velvet = CartLine::new("Red Velvet", 90_000, "rv.jpg");
        red_velvet.quantity = 2;
        let lines = vec![red_velvet, CartLine::new("Cupcake Vanilla", 1_500, "cv.jpg")];
        let html = block_on(LocalServerRenderer::<CartPanel>::with_props(props(lines)).render());
        assert!(!html.contains("empty-cart"));
        assert!(html.contains("IDR 90K"));
        assert!(html.contains("IDR 1.5K"));
        assert!(html.contains("IDR 181.5K"));
        assert!(html.contains("Hapus Red Velvet"));
        assert_eq!(html.matches("class=\"cart-item\"").count(), 2);
    }
}
