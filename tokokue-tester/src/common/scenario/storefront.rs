//! Browser flows over the storefront page, each paired with the shopper plan
//! that exercises the same behaviour without a browser.

use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;
use tokokue_core::{CheckoutOutcome, Notice, SearchOutcome};

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::{ShopState, TestBridge};
use crate::logic::{SessionSummary, ShopperAction, ShopperPlan};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const POLL_ATTEMPTS: usize = 30;

/// Open the storefront and wipe any cart left by an earlier scenario.
pub(super) async fn load_fresh(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    driver.goto(&ctx.base_url).await?;
    driver
        .find(By::Id("menu"))
        .await
        .context("menu section never rendered")?;
    ctx.bridge.ensure_available().await?;
    ctx.bridge.reset().await?;
    Ok(())
}

pub(super) async fn add_to_cart(driver: &WebDriver, name: &str) -> Result<()> {
    let selector = format!(".menu-card[data-name='{name}'] .add-to-cart-btn");
    driver
        .find(By::Css(&selector))
        .await
        .with_context(|| format!("no add button for {name}"))?
        .click()
        .await?;
    Ok(())
}

async fn open_cart(driver: &WebDriver) -> Result<()> {
    driver.find(By::Id("shopping-cart")).await?.click().await?;
    driver
        .find(By::Css(".shopping-cart-container.open"))
        .await
        .context("cart panel did not open")?;
    Ok(())
}

async fn click_labelled(driver: &WebDriver, label: &str) -> Result<()> {
    let selector = format!("button[aria-label='{label}']");
    driver
        .find(By::Css(&selector))
        .await
        .with_context(|| format!("no button labelled {label}"))?
        .click()
        .await?;
    Ok(())
}

async fn hidden_card_count(driver: &WebDriver) -> Result<usize> {
    Ok(driver.find_all(By::Css(".menu-card.hidden")).await?.len())
}

/// Poll the bridge until `done` holds.
pub(super) async fn wait_for_state<F>(
    bridge: &TestBridge<'_>,
    what: &str,
    done: F,
) -> Result<ShopState>
where
    F: Fn(&ShopState) -> bool + Send,
{
    let mut last = ShopState::default();
    for _ in 0..POLL_ATTEMPTS {
        last = bridge.state().await?;
        if done(&last) {
            return Ok(last);
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
    anyhow::bail!("timed out waiting for {what}; last state {last:?}")
}

pub struct CartControlsScenario;

#[async_trait::async_trait]
impl BrowserScenario for CartControlsScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_fresh(driver, ctx).await?;
        add_to_cart(driver, "Cheesecake").await?;
        open_cart(driver).await?;

        click_labelled(driver, "Tambah Cheesecake").await?;
        wait_for_state(&ctx.bridge, "Cheesecake x2", |s| {
            s.quantity_of("Cheesecake") == Some(2)
        })
        .await?;

        click_labelled(driver, "Kurangi Cheesecake").await?;
        wait_for_state(&ctx.bridge, "Cheesecake x1", |s| {
            s.quantity_of("Cheesecake") == Some(1)
        })
        .await?;

        click_labelled(driver, "Kurangi Cheesecake").await?;
        let state = wait_for_state(&ctx.bridge, "Cheesecake removed", |s| s.lines.is_empty()).await?;
        anyhow::ensure!(
            state.notification.as_deref() == Some("Cheesecake dihapus dari keranjang"),
            "unexpected notification {:?}",
            state.notification
        );

        let empty = driver.find(By::Css(".cart-items .empty-cart")).await?;
        anyhow::ensure!(
            empty.text().await? == "Keranjang belanja masih kosong",
            "empty cart message missing"
        );
        Ok(())
    }
}

impl CombinedScenario for CartControlsScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        let plan = ShopperPlan::new()
            .add("Cheesecake")
            .then(ShopperAction::Increment(String::from("Cheesecake")))
            .then(ShopperAction::Decrement(String::from("Cheesecake")))
            .then(ShopperAction::Decrement(String::from("Cheesecake")))
            .with_expectation(cart_controls_expectation);
        Some(TestScenario::new("Cart Quantity Controls", plan))
    }
}

fn cart_controls_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(summary.lines.is_empty(), "Cheesecake should be removed");
    anyhow::ensure!(
        summary.notices
            == [
                Notice::Added {
                    name: String::from("Cheesecake")
                },
                Notice::Removed {
                    name: String::from("Cheesecake")
                },
            ],
        "increment and decrement-to-one are silent, got {:?}",
        summary.notices
    );
    Ok(())
}

pub struct PersistenceScenario;

#[async_trait::async_trait]
impl BrowserScenario for PersistenceScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_fresh(driver, ctx).await?;
        add_to_cart(driver, "Brownies").await?;
        add_to_cart(driver, "Lapis Legit").await?;
        wait_for_state(&ctx.bridge, "two lines", |s| s.lines.len() == 2).await?;

        driver.refresh().await?;
        driver.find(By::Id("menu")).await?;
        ctx.bridge.ensure_available().await?;

        let state = ctx.bridge.state().await?;
        anyhow::ensure!(state.total == 195_000, "reloaded total was {}", state.total);

        open_cart(driver).await?;
        let rows = driver.find_all(By::Css(".cart-items .cart-item")).await?;
        anyhow::ensure!(rows.len() == 2, "expected 2 rendered lines, got {}", rows.len());
        let total = driver.find(By::Id("cart-total")).await?.text().await?;
        anyhow::ensure!(total == "IDR 195K", "cart total read {total:?}");
        Ok(())
    }
}

impl CombinedScenario for PersistenceScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        let plan = ShopperPlan::new()
            .add("Brownies")
            .add("Lapis Legit")
            .then(ShopperAction::Reload)
            .with_expectation(persistence_expectation);
        Some(TestScenario::new("Cart Survives Reload", plan))
    }
}

fn persistence_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(summary.lines.len() == 2, "both lines should survive reload");
    anyhow::ensure!(summary.total == 195_000, "total was {}", summary.total);
    anyhow::ensure!(
        summary.lines.first().map(|l| l.name.as_str()) == Some("Brownies"),
        "insertion order should be kept"
    );
    Ok(())
}

pub struct CheckoutScenario;

#[async_trait::async_trait]
impl BrowserScenario for CheckoutScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_fresh(driver, ctx).await?;

        open_cart(driver).await?;
        driver.find(By::Css(".checkout-btn")).await?.click().await?;
        let state = wait_for_state(&ctx.bridge, "empty-cart notice", |s| {
            s.notification.as_deref() == Some("Keranjang belanja masih kosong")
        })
        .await?;
        anyhow::ensure!(state.lines.is_empty(), "empty checkout changed the cart");

        driver.find(By::Id("close-cart")).await?.click().await?;
        add_to_cart(driver, "Tiramisu").await?;
        open_cart(driver).await?;
        driver.find(By::Css(".checkout-btn")).await?.click().await?;

        let alert = driver.get_alert_text().await.context("no checkout alert")?;
        anyhow::ensure!(
            alert.starts_with("Terima kasih telah berbelanja di Cake Castle!"),
            "unexpected alert {alert:?}"
        );
        driver.accept_alert().await?;

        let state = wait_for_state(&ctx.bridge, "cart cleared", |s| {
            s.lines.is_empty() && s.notification.as_deref() == Some("Keranjang telah dikosongkan")
        })
        .await?;
        anyhow::ensure!(state.total == 0, "total should reset");

        let open_panels = driver.find_all(By::Css(".shopping-cart-container.open")).await?;
        anyhow::ensure!(open_panels.is_empty(), "cart panel should close after checkout");
        Ok(())
    }
}

impl CombinedScenario for CheckoutScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        let plan = ShopperPlan::new()
            .then(ShopperAction::Checkout)
            .add("Tiramisu")
            .then(ShopperAction::Checkout)
            .then(ShopperAction::Reload)
            .with_expectation(checkout_expectation);
        Some(TestScenario::new("Checkout Empties Cart", plan))
    }
}

fn checkout_expectation(summary: &SessionSummary) -> Result<()> {
    let [first, second] = summary.checkouts.as_slice() else {
        anyhow::bail!("expected two checkouts, got {}", summary.checkouts.len());
    };
    anyhow::ensure!(
        matches!(first, CheckoutOutcome::Empty { .. }),
        "first checkout should find an empty cart"
    );
    anyhow::ensure!(
        matches!(
            second,
            CheckoutOutcome::Completed {
                total: 85_000,
                item_count: 1,
                ..
            }
        ),
        "second checkout should complete for 85000, got {second:?}"
    );
    anyhow::ensure!(summary.lines.is_empty(), "cart should be empty after reload");
    anyhow::ensure!(
        summary.notices.ends_with(&[Notice::CheckoutThanks, Notice::Cleared]),
        "checkout should thank then clear"
    );
    Ok(())
}

pub struct SearchScenario;

impl SearchScenario {
    async fn search(driver: &WebDriver, query: &str) -> Result<()> {
        let wrapper_visible = !driver
            .find_all(By::Css("#search-wrapper.visible"))
            .await?
            .is_empty();
        if !wrapper_visible {
            driver.find(By::Id("search")).await?.click().await?;
        }
        let input = driver.find(By::Id("search-input")).await?;
        input.clear().await?;
        input.send_keys(query).await?;
        input.send_keys(Key::Enter).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SearchScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_fresh(driver, ctx).await?;
        let total_cards = driver.find_all(By::Css(".menu-card")).await?.len();

        Self::search(driver, "VELVET").await?;
        tokio::time::sleep(POLL_INTERVAL).await;
        let hidden = hidden_card_count(driver).await?;
        anyhow::ensure!(
            hidden + 1 == total_cards,
            "expected only Red Velvet visible, {hidden} of {total_cards} hidden"
        );
        let wrappers = driver.find_all(By::Css("#search-wrapper.visible")).await?;
        anyhow::ensure!(wrappers.is_empty(), "search box should close after a match");

        Self::search(driver, "martabak").await?;
        wait_for_state(&ctx.bridge, "no-results notice", |s| {
            s.notification.as_deref() == Some("Tidak ada hasil yang ditemukan")
        })
        .await?;
        anyhow::ensure!(
            hidden_card_count(driver).await? == total_cards,
            "every card should hide while the notice shows"
        );

        tokio::time::sleep(Duration::from_millis(
            u64::from(tokokue_core::SEARCH_RESTORE_MS) + 500,
        ))
        .await;
        anyhow::ensure!(
            hidden_card_count(driver).await? == 0,
            "cards should come back after the restore delay"
        );
        Ok(())
    }
}

impl CombinedScenario for SearchScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        let plan = ShopperPlan::new()
            .search("VELVET")
            .search("martabak")
            .with_expectation(search_expectation);
        Some(TestScenario::new("Menu Search", plan))
    }
}

fn search_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(
        summary.search_outcomes
            == [
                SearchOutcome::Matched { count: 1 },
                SearchOutcome::NoResults {
                    notice: Notice::NoResults
                },
            ],
        "unexpected outcomes {:?}",
        summary.search_outcomes
    );
    Ok(())
}

pub struct ContactScenario;

#[async_trait::async_trait]
impl BrowserScenario for ContactScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_fresh(driver, ctx).await?;

        let fields = [
            ("name", "Sari"),
            ("email", "sari@example.com"),
            ("phone", "08123456789"),
            ("message", "Bisa pesan kue ulang tahun?"),
        ];
        for (name, value) in fields {
            let selector = format!("#contact-form [name='{name}']");
            driver.find(By::Css(&selector)).await?.send_keys(value).await?;
        }

        let submit = driver.find(By::Css("#contact-form button[type='submit']")).await?;
        submit.click().await?;
        anyhow::ensure!(submit.text().await? == "Mengirim...", "button should show progress");
        anyhow::ensure!(!submit.is_enabled().await?, "button should disable while sending");

        wait_for_state(&ctx.bridge, "message sent notice", |s| {
            s.notification.as_deref() == Some("Pesan terkirim! Form telah direset.")
        })
        .await?;

        let name = driver.find(By::Css("#contact-form [name='name']")).await?;
        anyhow::ensure!(
            name.prop("value").await?.unwrap_or_default().is_empty(),
            "form should reset after sending"
        );
        anyhow::ensure!(submit.is_enabled().await?, "button should re-enable");
        anyhow::ensure!(submit.text().await? == "Kirim Pesan", "label should restore");
        Ok(())
    }
}

impl CombinedScenario for ContactScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        let plan = ShopperPlan::new()
            .then(ShopperAction::SendMessage)
            .with_expectation(contact_expectation);
        Some(TestScenario::new("Contact Form Simulated Send", plan))
    }
}

fn contact_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(summary.ignored_submits == 1, "re-submit while sending should be ignored");
    anyhow::ensure!(summary.contact_idle, "form should be empty and idle afterwards");
    anyhow::ensure!(summary.notices == [Notice::MessageSent], "missing sent notice");
    Ok(())
}
