use serde::Serialize;
use tokokue_core::{Cart, CartLine, decode_snapshot};

/// What `__tokoKueTest.state()` reports to the browser harness.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeSnapshot {
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub item_count: u32,
    pub notification: Option<String>,
    pub notification_visible: bool,
}

impl BridgeSnapshot {
    /// Build a snapshot from the raw persisted cart and the toast contents.
    pub fn from_parts(raw_cart: Option<&str>, notification: Option<String>, visible: bool) -> Self {
        let cart = raw_cart
            .and_then(|raw| decode_snapshot(raw).ok())
            .unwrap_or_else(Cart::new);
        Self {
            lines: cart.lines().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
            notification: notification.filter(|text| !text.is_empty()),
            notification_visible: visible,
        }
    }
}
