use crate::components::item_card::ItemCard;
use crate::i18n::t;
use tokokue_core::{MenuCard, SearchFilter};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cards: Vec<MenuCard>,
    #[prop_or_default]
    pub filter: SearchFilter,
    pub on_add: Callback<MenuCard>,
}

#[function_component(MenuSection)]
pub fn menu_section(p: &Props) -> Html {
    html! {
        <section id="menu" class="menu">
            <h2>{ t("menu.title") }</h2>
            <div class="row">
                { for p.cards.iter().map(|card| html! {
                    <ItemCard
                        key={card.name.clone()}
                        card={card.clone()}
                        hidden={p.filter.is_hidden(&card.name)}
                        on_add={p.on_add.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
