pub mod cart_panel;
pub mod contact_form;
pub mod footer;
pub mod item_card;
pub mod menu_section;
pub mod navbar;
pub mod search_bar;
pub mod toast;
