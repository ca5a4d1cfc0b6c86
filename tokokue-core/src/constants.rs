//! Fixed storefront constants.
//!
//! The storage key and the deferred-callback delays are part of the page's
//! observable behaviour, so they live here rather than in JSON assets.

/// localStorage key holding the serialized cart snapshot.
pub const CART_STORAGE_KEY: &str = "cakeCastleCart";

/// Currency label prepended to every formatted price.
pub const CURRENCY_PREFIX: &str = "IDR";

/// How long a notification stays visible.
pub const NOTIFICATION_HIDE_MS: u32 = 3_000;

/// Delay before a zero-match search restores every card.
pub const SEARCH_RESTORE_MS: u32 = 1_500;

/// Simulated contact-form round trip.
pub const CONTACT_SEND_MS: u32 = 1_500;
