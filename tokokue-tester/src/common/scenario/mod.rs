use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::TestBridge;
use crate::logic::ShopperPlan;
use catalog::find_catalog_scenario;

pub mod catalog;
pub mod smoke;
pub mod storefront;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub seed: u64,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: ShopperPlan,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, plan: ShopperPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// A shopper plan with no browser counterpart.
#[derive(Clone)]
pub struct PlanScenario {
    name: &'static str,
    plan: ShopperPlan,
}

impl PlanScenario {
    pub const fn new(name: &'static str, plan: ShopperPlan) -> Self {
        Self { name, plan }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

#[async_trait::async_trait]
impl BrowserScenario for PlanScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("Browser testing not implemented for {}", self.name)
    }
}

impl CombinedScenario for PlanScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.plan.clone()))
    }
}

fn catalog(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    find_catalog_scenario(name).map(|scenario| Box::new(scenario) as _)
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "cart-controls" | "controls" => Some(Box::new(storefront::CartControlsScenario)),
        "persistence" | "reload" => Some(Box::new(storefront::PersistenceScenario)),
        "checkout" => Some(Box::new(storefront::CheckoutScenario)),
        "search" => Some(Box::new(storefront::SearchScenario)),
        "contact" => Some(Box::new(storefront::ContactScenario)),

        "add-twice" => catalog("Add Twice Merges Lines"),
        "decrement-removes" => catalog("Decrement To Zero Removes"),
        "clear-cart" | "clear" => catalog("Clear Cart"),
        "empty-checkout" => catalog("Checkout On Empty Cart"),
        "search-no-results" => catalog("Search Without Results"),
        "search-case" => catalog("Search Ignores Case"),
        "random-shopper" | "random" => catalog("Random Shopper Invariants"),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Smoke Test"),
        ("cart-controls", "Cart Quantity Controls"),
        ("persistence", "Cart Survives Reload"),
        ("checkout", "Checkout Empties Cart"),
        ("search", "Menu Search"),
        ("contact", "Contact Form Simulated Send"),
        ("add-twice", "Add Twice Merges Lines"),
        ("decrement-removes", "Decrement To Zero Removes"),
        ("clear-cart", "Clear Cart"),
        ("empty-checkout", "Checkout On Empty Cart"),
        ("search-no-results", "Search Without Results"),
        ("search-case", "Search Ignores Case"),
        ("random-shopper", "Random Shopper Invariants"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            assert!(get_scenario(key).is_some(), "{key} should resolve");
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn every_listed_scenario_has_logic_plan() {
        for (key, description) in list_scenarios() {
            let scenario = get_scenario(key).and_then(|s| s.as_logic_scenario());
            let scenario = scenario.unwrap_or_else(|| panic!("{key} has no logic plan"));
            assert_eq!(scenario.name, description);
        }
    }
}
