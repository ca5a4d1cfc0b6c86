use tokokue_core::{
    CART_STORAGE_KEY, CartStore, CheckoutOutcome, Hydration, MemoryStorage, Menu, Notice,
    SearchFilter, SearchOutcome, decode_snapshot, format_currency,
};

fn menu() -> Menu {
    Menu::from_json(include_str!(
        "../../tokokue-web/static/assets/data/menu.json"
    ))
    .unwrap()
}

fn fresh_store() -> CartStore<MemoryStorage> {
    let mut store = CartStore::new(MemoryStorage::new());
    assert_eq!(store.initialize(), Hydration::Empty);
    store
}

#[test]
fn bundled_menu_has_unique_priced_cards() {
    let menu = menu();
    assert!(!menu.is_empty());
    assert!(menu.cards.iter().all(|card| card.price > 0));
    assert!(menu.find("Red Velvet").is_some());
}

#[test]
fn red_velvet_twice_is_one_line_of_two() {
    let mut store = fresh_store();
    store.add_item("Red Velvet", 90_000, "assets/img/menu/red-velvet.svg");
    store.add_item("Red Velvet", 90_000, "assets/img/menu/red-velvet.svg");
    assert_eq!(store.line_count(), 1);
    assert_eq!(store.lines()[0].quantity, 2);
    assert_eq!(store.total(), 180_000);
    assert_eq!(format_currency(store.total()), "IDR 180K");
}

#[test]
fn adding_every_menu_card_totals_the_menu() {
    let menu = menu();
    let mut store = fresh_store();
    for card in &menu.cards {
        store.add_item(&card.name, card.price, &card.image);
    }
    let expected: u64 = menu.cards.iter().map(|c| c.price).sum();
    assert_eq!(store.total(), expected);
    assert_eq!(store.line_count(), menu.cards.len());
}

#[test]
fn persisted_snapshot_round_trips_through_a_new_store() {
    let storage = MemoryStorage::new();
    let mut first = CartStore::new(storage.clone());
    first.initialize();
    first.add_item("Black Forest", 95_000, "bf.jpg");
    first.add_item("Cheesecake", 75_000, "cc.jpg");
    first.increment_quantity("Black Forest");

    let mut second = CartStore::new(storage.clone());
    assert_eq!(second.initialize(), Hydration::Restored);
    assert_eq!(second.lines(), first.lines());

    let raw = storage.raw(CART_STORAGE_KEY).unwrap();
    assert_eq!(decode_snapshot(&raw).unwrap().lines(), first.lines());
}

#[test]
fn snapshot_written_by_the_page_script_is_accepted() {
    let raw = r#"[{"name":"Tiramisu","price":85000,"image":"http://localhost/img/t.jpg","quantity":3}]"#;
    let mut store = CartStore::new(MemoryStorage::with_entry(CART_STORAGE_KEY, raw));
    assert_eq!(store.initialize(), Hydration::Restored);
    assert_eq!(store.total(), 255_000);
}

#[test]
fn decrement_to_zero_then_clear() {
    let mut store = fresh_store();
    store.add_item("Brownies", 45_000, "b.jpg");
    store.add_item("Cheesecake", 75_000, "c.jpg");
    let notice = store.decrement_quantity("Brownies");
    assert!(matches!(notice, Some(Notice::Removed { name }) if name == "Brownies"));
    assert_eq!(store.line_count(), 1);
    assert_eq!(store.clear(), Notice::Cleared);
    assert_eq!(store.total(), 0);
    assert_eq!(store.line_count(), 0);
}

#[test]
fn checkout_flow_matches_empty_and_full_cart_paths() {
    let mut store = fresh_store();
    assert!(matches!(store.checkout(), CheckoutOutcome::Empty { .. }));
    store.add_item("Red Velvet", 90_000, "rv.jpg");
    assert!(matches!(
        store.checkout(),
        CheckoutOutcome::Completed { total: 90_000, item_count: 1, .. }
    ));
    assert!(store.is_empty());
}

#[test]
fn search_over_bundled_menu() {
    let menu = menu();
    let mut filter = SearchFilter::new();
    let outcome = filter.apply("VELVET", menu.titles());
    assert!(matches!(outcome, SearchOutcome::Matched { count } if count >= 1));
    assert!(!filter.is_hidden("Red Velvet"));

    let outcome = filter.apply("pizza", menu.titles());
    assert!(matches!(outcome, SearchOutcome::NoResults { .. }));
    assert_eq!(filter.hidden_count(), menu.cards.len());

    assert_eq!(filter.apply("", menu.titles()), SearchOutcome::Reset);
    assert_eq!(filter.hidden_count(), 0);
}
