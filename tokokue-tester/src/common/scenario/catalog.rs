use anyhow::{Result, anyhow};
use std::collections::HashSet;

use crate::common::scenario::PlanScenario;
use crate::logic::{SessionSummary, ShopperAction, ShopperPlan};
use tokokue_core::{CartLine, CheckoutOutcome, Notice, SearchOutcome};

pub fn catalog_scenarios() -> Vec<PlanScenario> {
    vec![
        PlanScenario::new(
            "Add Twice Merges Lines",
            ShopperPlan::new()
                .add("Red Velvet")
                .add("Red Velvet")
                .with_expectation(add_twice_expectation),
        ),
        PlanScenario::new(
            "Decrement To Zero Removes",
            ShopperPlan::new()
                .add("Brownies")
                .then(ShopperAction::Decrement(String::from("Brownies")))
                .with_expectation(decrement_removes_expectation),
        ),
        PlanScenario::new(
            "Clear Cart",
            ShopperPlan::new()
                .add("Tiramisu")
                .add("Cheesecake")
                .then(ShopperAction::Clear)
                .then(ShopperAction::Reload)
                .with_expectation(clear_cart_expectation),
        ),
        PlanScenario::new(
            "Checkout On Empty Cart",
            ShopperPlan::new()
                .then(ShopperAction::Checkout)
                .with_expectation(empty_checkout_expectation),
        ),
        PlanScenario::new(
            "Search Without Results",
            ShopperPlan::new()
                .search("martabak")
                .with_expectation(no_results_expectation),
        ),
        PlanScenario::new(
            "Search Ignores Case",
            ShopperPlan::new()
                .search("  BROWNIES ")
                .then(ShopperAction::Search(String::new()))
                .with_expectation(search_case_expectation),
        ),
        PlanScenario::new(
            "Random Shopper Invariants",
            ShopperPlan::new()
                .then(ShopperAction::RandomBurst(60))
                .then(ShopperAction::Reload)
                .with_expectation(cart_invariants_expectation),
        ),
    ]
}

pub fn find_catalog_scenario(name: &str) -> Option<PlanScenario> {
    catalog_scenarios()
        .into_iter()
        .find(|scenario| scenario.name() == name)
}

fn add_twice_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(
        summary.lines.len() == 1,
        "expected a single Red Velvet line, got {}",
        summary.lines.len()
    );
    anyhow::ensure!(summary.lines[0].quantity == 2, "quantity should be 2");
    anyhow::ensure!(summary.total == 180_000, "total should be 180000");
    anyhow::ensure!(
        summary.notices
            == [
                Notice::Added {
                    name: String::from("Red Velvet")
                },
                Notice::Incremented {
                    name: String::from("Red Velvet")
                },
            ],
        "unexpected notices {:?}",
        summary.notices
    );
    Ok(())
}

fn decrement_removes_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(summary.lines.is_empty(), "Brownies should be gone");
    let last = summary
        .notices
        .last()
        .ok_or_else(|| anyhow!("no notices recorded"))?;
    anyhow::ensure!(
        *last
            == Notice::Removed {
                name: String::from("Brownies")
            },
        "last notice should announce removal, got {last:?}"
    );
    Ok(())
}

fn clear_cart_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(summary.lines.is_empty(), "cart should stay empty after reload");
    anyhow::ensure!(
        summary.persisted.as_ref().is_some_and(tokokue_core::Cart::is_empty),
        "storage should hold an empty cart"
    );
    anyhow::ensure!(
        summary.notices.last() == Some(&Notice::Cleared),
        "clear should notify"
    );
    Ok(())
}

fn empty_checkout_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(
        matches!(
            summary.checkouts.as_slice(),
            [CheckoutOutcome::Empty { .. }]
        ),
        "checkout on an empty cart should not complete"
    );
    anyhow::ensure!(
        summary.notices == [Notice::CartEmpty],
        "expected the empty-cart notice, got {:?}",
        summary.notices
    );
    Ok(())
}

fn no_results_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(
        matches!(
            summary.search_outcomes.as_slice(),
            [SearchOutcome::NoResults { .. }]
        ),
        "search should report no results"
    );
    anyhow::ensure!(
        summary.hidden_cards == summary.menu_size,
        "every card should be hidden until the restore timer fires"
    );
    anyhow::ensure!(summary.notices == [Notice::NoResults], "missing notice");
    Ok(())
}

fn search_case_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(
        summary.search_outcomes
            == [SearchOutcome::Matched { count: 1 }, SearchOutcome::Reset],
        "unexpected outcomes {:?}",
        summary.search_outcomes
    );
    anyhow::ensure!(summary.hidden_cards == 0, "reset should show every card");
    Ok(())
}

fn cart_invariants_expectation(summary: &SessionSummary) -> Result<()> {
    let mut names = HashSet::new();
    for line in &summary.lines {
        anyhow::ensure!(line.quantity >= 1, "{} has quantity 0", line.name);
        anyhow::ensure!(names.insert(&line.name), "{} appears twice", line.name);
    }

    let expected: u64 = summary.lines.iter().map(CartLine::subtotal).sum();
    anyhow::ensure!(
        summary.total == expected,
        "total {} does not match line sum {expected}",
        summary.total
    );

    if let Some(persisted) = &summary.persisted {
        anyhow::ensure!(
            persisted.lines() == summary.lines.as_slice(),
            "persisted cart diverged from the in-memory cart"
        );
    }

    for outcome in &summary.checkouts {
        if let CheckoutOutcome::Completed { total, .. } = outcome {
            anyhow::ensure!(*total > 0, "completed checkout with zero total");
        }
    }
    Ok(())
}
