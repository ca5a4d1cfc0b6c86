use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use thirtyfour::prelude::*;
use tokokue_core::CartLine;

/// The storefront as reported by `window.__tokoKueTest.state()`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopState {
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub item_count: u32,
    pub notification: Option<String>,
    pub notification_visible: bool,
}

impl ShopState {
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.name == name)
            .map(|line| line.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__tokoKueTest", vec![])
            .await?;
        let ok = result.json().as_bool().unwrap_or(false);
        if !ok {
            bail!("__tokoKueTest is not available. Did you pass ?test=1 to the storefront?");
        }
        Ok(())
    }

    /// Empty the persisted cart and return the page to its initial UI state.
    pub async fn reset(&self) -> Result<()> {
        self.driver
            .execute("window.__tokoKueTest.reset()", vec![])
            .await?;
        Ok(())
    }

    pub async fn state(&self) -> Result<ShopState> {
        let result = self
            .driver
            .execute("return window.__tokoKueTest.state()", vec![])
            .await?;
        let v = result.json().clone();
        let s: ShopState = serde_json::from_value(v).context("parsing ShopState")?;
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shop_state_reads_bridge_payload() {
        let state: ShopState = serde_json::from_value(json!({
            "lines": [{ "name": "Tiramisu", "price": 85000, "image": "t.jpg", "quantity": 2 }],
            "total": 170000,
            "itemCount": 2,
            "notification": "Tiramisu jumlah ditambah!",
            "notificationVisible": true
        }))
        .expect("parse");
        assert_eq!(state.quantity_of("Tiramisu"), Some(2));
        assert_eq!(state.quantity_of("Brownies"), None);
        assert_eq!(state.total, 170_000);
        assert!(state.notification_visible);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let state: ShopState = serde_json::from_value(json!({ "total": 0 })).expect("parse");
        assert_eq!(state, ShopState::default());
    }
}
