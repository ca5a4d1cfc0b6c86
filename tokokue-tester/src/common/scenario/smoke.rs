use anyhow::Result;
use thirtyfour::prelude::*;

use super::storefront::{add_to_cart, load_fresh, wait_for_state};
use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{SessionSummary, ShopperPlan};

pub struct SmokeScenario;

impl SmokeScenario {
    fn plan() -> ShopperPlan {
        ShopperPlan::new()
            .add("Red Velvet")
            .add("Red Velvet")
            .with_expectation(smoke_expectation)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_fresh(driver, ctx).await?;

        let cards = driver.find_all(By::Css(".menu-card")).await?;
        anyhow::ensure!(!cards.is_empty(), "menu rendered no cards");
        if ctx.verbose {
            println!(
                "  🌐 Storefront loaded with {} menu cards, seed: {}",
                cards.len(),
                ctx.seed
            );
        }

        add_to_cart(driver, "Red Velvet").await?;
        add_to_cart(driver, "Red Velvet").await?;

        let state = wait_for_state(&ctx.bridge, "Red Velvet x2", |s| {
            s.quantity_of("Red Velvet") == Some(2)
        })
        .await?;
        if ctx.verbose {
            println!("  📊 Cart state: {state:?}");
        }

        anyhow::ensure!(state.lines.len() == 1, "expected one line, got {}", state.lines.len());
        anyhow::ensure!(state.total == 180_000, "total should be 180000, got {}", state.total);
        anyhow::ensure!(
            state.notification.as_deref() == Some("Red Velvet jumlah ditambah!"),
            "unexpected notification {:?}",
            state.notification
        );
        anyhow::ensure!(state.notification_visible, "toast should be showing");

        let badge = driver.find(By::Css("#shopping-cart .cart-badge")).await?;
        anyhow::ensure!(badge.text().await? == "2", "cart badge should read 2");

        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", Self::plan()))
    }
}

fn smoke_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(summary.menu_size > 0, "menu should not be empty");
    anyhow::ensure!(
        summary.lines.len() == 1,
        "expected one line, got {}",
        summary.lines.len()
    );
    anyhow::ensure!(summary.item_count == 2, "expected two items");
    anyhow::ensure!(
        summary.total == 180_000,
        "total should be 180000, got {}",
        summary.total
    );
    anyhow::ensure!(
        summary.persisted.as_ref().map(tokokue_core::Cart::total) == Some(summary.total),
        "storage should match the cart"
    );
    Ok(())
}
