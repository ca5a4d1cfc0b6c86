use crate::i18n::t;
use tokokue_core::{MenuCard, format_currency};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: MenuCard,
    #[prop_or_default]
    pub hidden: bool,
    pub on_add: Callback<MenuCard>,
}

#[function_component(ItemCard)]
pub fn item_card(p: &Props) -> Html {
    let on_add = {
        let cb = p.on_add.clone();
        let card = p.card.clone();
        Callback::from(move |_: MouseEvent| cb.emit(card.clone()))
    };
    let card = &p.card;

    html! {
        <div
            class={classes!("menu-card", p.hidden.then_some("hidden"))}
            data-name={card.name.clone()}
            data-price={card.price.to_string()}
        >
            <img src={card.image.clone()} alt={card.name.clone()} class="menu-card-img" />
            <h3 class="menu-card-title">{ card.name.clone() }</h3>
            if !card.description.is_empty() {
                <p class="menu-card-desc">{ card.description.clone() }</p>
            }
            <p class="menu-card-price">{ format_currency(card.price) }</p>
            <button class="add-to-cart-btn" onclick={on_add}>
                <i data-feather="shopping-bag"></i>
                { t("menu.add") }
            </button>
        </div>
    }
}
