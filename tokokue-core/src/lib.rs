//! Toko Kue storefront core
//!
//! Platform-agnostic logic for the Cake Castle storefront: the cart and its
//! persisted snapshot, price formatting, the menu catalogue, search filtering
//! and the contact-form simulator. No DOM or browser dependencies live here.

pub mod cart;
pub mod catalog;
pub mod constants;
pub mod contact;
pub mod notice;
pub mod price;
pub mod search;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use cart::{Cart, CartLine};
pub use catalog::{CatalogError, Menu, MenuCard};
pub use constants::{
    CART_STORAGE_KEY, CONTACT_SEND_MS, CURRENCY_PREFIX, NOTIFICATION_HIDE_MS, SEARCH_RESTORE_MS,
};
pub use contact::{ContactField, ContactForm, ContactPhase, ContactState};
pub use notice::Notice;
pub use price::{format_currency, format_price};
pub use search::{SearchFilter, SearchOutcome, normalize_query, title_matches};
pub use storage::{CartStorage, MemoryStorage};
pub use store::{
    CartStore, CheckoutOutcome, Hydration, SnapshotError, decode_snapshot, encode_snapshot,
};
