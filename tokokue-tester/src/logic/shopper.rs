use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::Arc;
use thiserror::Error;
use tokokue_core::{
    Cart, CartLine, CartStore, CatalogError, CheckoutOutcome, ContactField, ContactState,
    MemoryStorage, Menu, Notice, SearchFilter, SearchOutcome, decode_snapshot,
};

const MENU_JSON: &str = include_str!("../../../tokokue-web/static/assets/data/menu.json");

#[derive(Debug, Error)]
pub enum ShopperError {
    #[error("menu catalogue failed to load: {0}")]
    Catalog(#[from] CatalogError),
    #[error("menu catalogue is empty")]
    EmptyMenu,
}

/// One step a simulated shopper takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopperAction {
    Add(String),
    Increment(String),
    Decrement(String),
    Remove(String),
    Clear,
    Checkout,
    Search(String),
    /// Fill in and submit the contact form, pressing submit twice before the
    /// simulated send completes.
    SendMessage,
    /// Rebuild the store from storage, as a page reload would.
    Reload,
    /// A burst of random cart operations drawn from the iteration seed.
    RandomBurst(usize),
}

pub type Expectation = fn(&SessionSummary) -> Result<()>;

#[derive(Clone, Default)]
pub struct ShopperPlan {
    pub actions: Vec<ShopperAction>,
    pub expectations: Vec<Expectation>,
}

impl std::fmt::Debug for ShopperPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopperPlan")
            .field("actions", &self.actions)
            .field("expectations", &self.expectations.len())
            .finish()
    }
}

impl ShopperPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(mut self, action: ShopperAction) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn add(self, name: &str) -> Self {
        self.then(ShopperAction::Add(name.to_string()))
    }

    #[must_use]
    pub fn search(self, query: &str) -> Self {
        self.then(ShopperAction::Search(query.to_string()))
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }
}

/// Everything observable at the end of a simulated session.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub seed: u64,
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub item_count: u32,
    /// The cart as decoded from storage, if anything was written.
    pub persisted: Option<Cart>,
    pub notices: Vec<Notice>,
    pub search_outcomes: Vec<SearchOutcome>,
    pub checkouts: Vec<CheckoutOutcome>,
    pub hidden_cards: usize,
    pub menu_size: usize,
    /// Contact submissions rejected because one was already in flight.
    pub ignored_submits: usize,
    /// Whether the contact form was left empty and idle.
    pub contact_idle: bool,
    pub actions_run: usize,
}

#[derive(Debug, Clone)]
pub struct ShopperRunner {
    menu: Arc<Menu>,
    verbose: bool,
}

impl ShopperRunner {
    /// Load the storefront's bundled menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled menu is malformed or empty.
    pub fn load_default(verbose: bool) -> Result<Self, ShopperError> {
        let menu = Menu::from_json(MENU_JSON)?;
        if menu.is_empty() {
            return Err(ShopperError::EmptyMenu);
        }
        Ok(Self::with_menu(Arc::new(menu), verbose))
    }

    #[must_use]
    pub const fn with_menu(menu: Arc<Menu>, verbose: bool) -> Self {
        Self { menu, verbose }
    }

    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Run `plan` against a fresh in-memory storefront.
    #[must_use]
    pub fn run_plan(&self, plan: &ShopperPlan, seed: u64) -> SessionSummary {
        let mut session = Session::new(&self.menu, seed);
        for action in &plan.actions {
            if self.verbose {
                log::debug!("seed {seed}: {action:?}");
            }
            session.apply(action);
        }
        session.finish()
    }
}

struct Session<'a> {
    menu: &'a Menu,
    storage: MemoryStorage,
    store: CartStore<MemoryStorage>,
    filter: SearchFilter,
    contact: ContactState,
    ignored_submits: usize,
    rng: ChaCha20Rng,
    seed: u64,
    notices: Vec<Notice>,
    search_outcomes: Vec<SearchOutcome>,
    checkouts: Vec<CheckoutOutcome>,
    actions_run: usize,
}

impl<'a> Session<'a> {
    fn new(menu: &'a Menu, seed: u64) -> Self {
        let storage = MemoryStorage::new();
        let mut store = CartStore::new(storage.clone());
        store.initialize();
        Self {
            menu,
            storage,
            store,
            filter: SearchFilter::new(),
            contact: ContactState::new(),
            ignored_submits: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            notices: Vec::new(),
            search_outcomes: Vec::new(),
            checkouts: Vec::new(),
            actions_run: 0,
        }
    }

    fn add(&mut self, name: &str) {
        let Some(card) = self.menu.find(name) else {
            log::warn!("shopper asked for unknown card {name:?}");
            return;
        };
        let notice = self.store.add_item(&card.name, card.price, &card.image);
        self.notices.push(notice);
    }

    fn apply(&mut self, action: &ShopperAction) {
        self.actions_run += 1;
        match action {
            ShopperAction::Add(name) => self.add(name),
            ShopperAction::Increment(name) => {
                self.store.increment_quantity(name);
            }
            ShopperAction::Decrement(name) => {
                if let Some(notice) = self.store.decrement_quantity(name) {
                    self.notices.push(notice);
                }
            }
            ShopperAction::Remove(name) => {
                if let Some(notice) = self.store.remove_item(name) {
                    self.notices.push(notice);
                }
            }
            ShopperAction::Clear => {
                let notice = self.store.clear();
                self.notices.push(notice);
            }
            ShopperAction::Checkout => {
                let outcome = self.store.checkout();
                match &outcome {
                    CheckoutOutcome::Empty { notice } => self.notices.push(notice.clone()),
                    CheckoutOutcome::Completed { notice, .. } => {
                        self.notices.push(Notice::CheckoutThanks);
                        self.notices.push(notice.clone());
                    }
                }
                self.checkouts.push(outcome);
            }
            ShopperAction::Search(query) => {
                let outcome = self.filter.apply(query, self.menu.titles());
                if let SearchOutcome::NoResults { notice } = &outcome {
                    self.notices.push(notice.clone());
                }
                self.search_outcomes.push(outcome);
            }
            ShopperAction::SendMessage => self.send_message(),
            ShopperAction::Reload => {
                self.store = CartStore::new(self.storage.clone());
                self.store.initialize();
            }
            ShopperAction::RandomBurst(count) => {
                for _ in 0..*count {
                    let step = self.random_action();
                    self.apply(&step);
                }
            }
        }
    }

    fn send_message(&mut self) {
        let email = format!("sari+{}@example.com", self.seed);
        self.contact.set_field(ContactField::Name, String::from("Sari"));
        self.contact.set_field(ContactField::Email, email);
        self.contact.set_field(ContactField::Phone, String::from("08123456789"));
        self.contact.set_field(
            ContactField::Message,
            String::from("Bisa pesan kue ulang tahun?"),
        );
        for _ in 0..2 {
            if !self.contact.submit() {
                self.ignored_submits += 1;
            }
        }
        if let Some(notice) = self.contact.complete() {
            self.notices.push(notice);
        }
    }

    fn random_card(&mut self) -> String {
        let idx = self.rng.gen_range(0..self.menu.cards.len());
        self.menu.cards[idx].name.clone()
    }

    fn random_action(&mut self) -> ShopperAction {
        let name = self.random_card();
        match self.rng.gen_range(0..100_u8) {
            0..=44 => ShopperAction::Add(name),
            45..=59 => ShopperAction::Increment(name),
            60..=79 => ShopperAction::Decrement(name),
            80..=89 => ShopperAction::Remove(name),
            90..=93 => ShopperAction::Reload,
            94..=96 => ShopperAction::Clear,
            _ => ShopperAction::Checkout,
        }
    }

    fn finish(self) -> SessionSummary {
        let persisted = self
            .storage
            .raw(tokokue_core::CART_STORAGE_KEY)
            .and_then(|raw| decode_snapshot(&raw).ok());
        SessionSummary {
            seed: self.seed,
            lines: self.store.lines().to_vec(),
            total: self.store.total(),
            item_count: self.store.item_count(),
            persisted,
            notices: self.notices,
            search_outcomes: self.search_outcomes,
            checkouts: self.checkouts,
            hidden_cards: self.filter.hidden_count(),
            menu_size: self.menu.cards.len(),
            ignored_submits: self.ignored_submits,
            contact_idle: self.contact == ContactState::new(),
            actions_run: self.actions_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ShopperRunner {
        ShopperRunner::load_default(false).expect("bundled menu loads")
    }

    #[test]
    fn add_twice_merges_into_one_line() {
        let plan = ShopperPlan::new().add("Red Velvet").add("Red Velvet");
        let summary = runner().run_plan(&plan, 1);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total, 180_000);
        assert_eq!(summary.persisted.map(|c| c.total()), Some(180_000));
    }

    #[test]
    fn reload_restores_from_storage() {
        let plan = ShopperPlan::new()
            .add("Brownies")
            .then(ShopperAction::Increment(String::from("Brownies")))
            .then(ShopperAction::Reload);
        let summary = runner().run_plan(&plan, 7);
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn random_bursts_are_deterministic_per_seed() {
        let plan = ShopperPlan::new().then(ShopperAction::RandomBurst(30));
        let runner = runner();
        let a = runner.run_plan(&plan, 42);
        let b = runner.run_plan(&plan, 42);
        assert_eq!(a.lines, b.lines);
        assert_eq!(a.notices, b.notices);
        assert_eq!(a.actions_run, 31);
    }

    #[test]
    fn send_message_ignores_resubmit_and_resets() {
        let summary = runner().run_plan(&ShopperPlan::new().then(ShopperAction::SendMessage), 5);
        assert_eq!(summary.ignored_submits, 1);
        assert!(summary.contact_idle);
        assert_eq!(summary.notices, vec![Notice::MessageSent]);
    }

    #[test]
    fn checkout_records_thanks_then_cleared() {
        let plan = ShopperPlan::new()
            .then(ShopperAction::Checkout)
            .add("Cheesecake")
            .then(ShopperAction::Checkout);
        let summary = runner().run_plan(&plan, 3);
        assert_eq!(summary.checkouts.len(), 2);
        assert_eq!(
            summary.notices,
            vec![
                Notice::CartEmpty,
                Notice::Added {
                    name: String::from("Cheesecake")
                },
                Notice::CheckoutThanks,
                Notice::Cleared,
            ]
        );
    }
}
