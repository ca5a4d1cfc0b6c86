//! Cart store: the single owner of cart state and its persisted mirror.
//!
//! Every mutator finishes by writing the snapshot back to storage, so the
//! in-memory cart and the stored copy agree after each call. Mutators return
//! the [`Notice`] the page should show, if any.

use crate::cart::{Cart, CartLine};
use crate::constants::CART_STORAGE_KEY;
use crate::notice::Notice;
use crate::storage::CartStorage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cart snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Decode a persisted snapshot into a cart.
///
/// # Errors
///
/// Returns an error if `raw` is not a JSON array of cart lines.
pub fn decode_snapshot(raw: &str) -> Result<Cart, SnapshotError> {
    let lines: Vec<CartLine> = serde_json::from_str(raw)?;
    Ok(Cart::from_lines(lines))
}

/// Encode a cart into its persisted snapshot form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_snapshot(cart: &Cart) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(cart)?)
}

/// What [`CartStore::initialize`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// A previous call already hydrated the store.
    AlreadyHydrated,
    /// A stored snapshot replaced the in-memory cart.
    Restored,
    /// Nothing was stored.
    Empty,
    /// A stored snapshot was unreadable and has been ignored.
    Discarded,
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to buy; the cart is untouched.
    Empty { notice: Notice },
    /// The order was acknowledged and the cart emptied.
    Completed {
        total: u64,
        item_count: u32,
        notice: Notice,
    },
}

#[derive(Debug, Clone)]
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
    hydrated: bool,
}

impl<S: CartStorage> CartStore<S> {
    /// Create an empty, not yet hydrated store.
    pub fn new(storage: S) -> Self {
        Self {
            cart: Cart::new(),
            storage,
            hydrated: false,
        }
    }

    /// Restore the cart from storage. Only the first call reads storage.
    pub fn initialize(&mut self) -> Hydration {
        if self.hydrated {
            return Hydration::AlreadyHydrated;
        }
        self.hydrated = true;

        let raw = match self.storage.get_item(CART_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Hydration::Empty,
            Err(err) => {
                log::warn!("cart storage unreadable: {err}");
                return Hydration::Empty;
            }
        };

        match decode_snapshot(&raw) {
            Ok(cart) => {
                log::debug!("restored cart with {} lines", cart.line_count());
                self.cart = cart;
                Hydration::Restored
            }
            Err(err) => {
                log::warn!("ignoring saved cart: {err}");
                Hydration::Discarded
            }
        }
    }

    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Add one unit of a product, appending a line if it is new.
    pub fn add_item(&mut self, name: &str, price: u64, image: &str) -> Notice {
        let appended = self.cart.add(name, price, image);
        log::debug!("add {name}: appended={appended}");
        self.persist();
        let name = name.to_string();
        if appended {
            Notice::Added { name }
        } else {
            Notice::Incremented { name }
        }
    }

    /// Remove a line by name. Unknown names are a no-op.
    pub fn remove_item(&mut self, name: &str) -> Option<Notice> {
        let removed = self.cart.remove(name)?;
        log::debug!("removed {}", removed.name);
        self.persist();
        Some(Notice::Removed { name: removed.name })
    }

    /// Raise a line's quantity by one. Returns the new quantity.
    pub fn increment_quantity(&mut self, name: &str) -> Option<u32> {
        let qty = self.cart.increment(name)?;
        self.persist();
        Some(qty)
    }

    /// Lower a line's quantity by one; a line at quantity 1 is removed and the
    /// removal notice is returned.
    pub fn decrement_quantity(&mut self, name: &str) -> Option<Notice> {
        let quantity = self.cart.find_line(name)?.quantity;
        if quantity <= 1 {
            return self.remove_item(name);
        }
        self.cart.decrement(name);
        self.persist();
        None
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Notice {
        self.cart.clear();
        self.persist();
        Notice::Cleared
    }

    /// Simulated checkout: acknowledges a non-empty cart and empties it.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.cart.is_empty() {
            return CheckoutOutcome::Empty {
                notice: Notice::CartEmpty,
            };
        }
        let total = self.cart.total();
        let item_count = self.cart.item_count();
        log::info!("checkout: {item_count} items, total {total}");
        let notice = self.clear();
        CheckoutOutcome::Completed {
            total,
            item_count,
            notice,
        }
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.cart.line_count()
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn persist(&self) {
        let snapshot = match encode_snapshot(&self.cart) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("failed to encode cart: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set_item(CART_STORAGE_KEY, &snapshot) {
            log::error!("failed to persist cart: {err}");
        }
    }
}
