//! Cart lines and the ordered cart they live in.
use serde::{Deserialize, Serialize};

/// A single product entry in the cart.
///
/// Field names match the persisted snapshot format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product name; unique within a cart.
    pub name: String,
    /// Unit price in rupiah.
    pub price: u64,
    /// Image URL shown next to the line.
    pub image: String,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn new(name: impl Into<String>, price: u64, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image: image.into(),
            quantity: 1,
        }
    }

    /// Price multiplied by quantity.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Ordered cart contents; insertion order is add order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from persisted lines, dropping anything that would break
    /// the cart invariants (zero quantities, repeated names).
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 || cart.find_line(&line.name).is_some() {
                continue;
            }
            cart.lines.push(line);
        }
        cart
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find a cart line by product name.
    #[must_use]
    pub fn find_line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    fn find_line_mut(&mut self, name: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.name == name)
    }

    /// Add one unit of a product.
    /// Returns `true` when a new line was appended, `false` when an existing
    /// line was bumped.
    pub fn add(&mut self, name: &str, price: u64, image: &str) -> bool {
        if let Some(line) = self.find_line_mut(name) {
            line.quantity = line.quantity.saturating_add(1);
            false
        } else {
            self.lines.push(CartLine::new(name, price, image));
            true
        }
    }

    /// Remove a line entirely, returning it.
    pub fn remove(&mut self, name: &str) -> Option<CartLine> {
        let idx = self.lines.iter().position(|line| line.name == name)?;
        Some(self.lines.remove(idx))
    }

    /// Raise a line's quantity by one. Returns the new quantity.
    pub fn increment(&mut self, name: &str) -> Option<u32> {
        let line = self.find_line_mut(name)?;
        line.quantity = line.quantity.saturating_add(1);
        Some(line.quantity)
    }

    /// Lower a line's quantity by one, removing the line instead of letting
    /// it reach zero. Returns the new quantity (0 if the line is gone).
    pub fn decrement(&mut self, name: &str) -> Option<u32> {
        let line = self.find_line_mut(name)?;
        if line.quantity > 1 {
            line.quantity -= 1;
            return Some(line.quantity);
        }
        self.remove(name).map(|_| 0)
    }

    /// Clear the entire cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |sum, line| sum.saturating_add(line.subtotal()))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities, used for the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_twice_bumps_existing_line() {
        let mut cart = Cart::new();
        assert!(cart.add("Red Velvet", 90_000, "img/red-velvet.jpg"));
        assert!(!cart.add("Red Velvet", 90_000, "img/red-velvet.jpg"));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 180_000);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add("Tiramisu", 85_000, "a.jpg");
        cart.add("Black Forest", 95_000, "b.jpg");
        cart.add("Tiramisu", 85_000, "a.jpg");
        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Tiramisu", "Black Forest"]);
    }

    #[test]
    fn decrement_at_one_removes_line() {
        let mut cart = Cart::new();
        cart.add("Cheesecake", 75_000, "c.jpg");
        cart.add("Brownies", 45_000, "d.jpg");
        assert_eq!(cart.decrement("Cheesecake"), Some(0));
        assert_eq!(cart.line_count(), 1);
        assert!(cart.find_line("Cheesecake").is_none());
    }

    #[test]
    fn decrement_above_one_keeps_line() {
        let mut cart = Cart::new();
        cart.add("Brownies", 45_000, "d.jpg");
        cart.increment("Brownies");
        assert_eq!(cart.decrement("Brownies"), Some(1));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut cart = Cart::new();
        assert_eq!(cart.increment("Ghost"), None);
        assert_eq!(cart.decrement("Ghost"), None);
        assert!(cart.remove("Ghost").is_none());
    }

    #[test]
    fn from_lines_drops_zero_quantities_and_duplicates() {
        let mut zero = CartLine::new("Zero", 10, "z.jpg");
        zero.quantity = 0;
        let cart = Cart::from_lines(vec![
            CartLine::new("A", 10, "a.jpg"),
            zero,
            CartLine::new("A", 99, "dup.jpg"),
        ]);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].price, 10);
    }

    #[test]
    fn clear_resets_total() {
        let mut cart = Cart::new();
        cart.add("A", 1_500, "a.jpg");
        cart.clear();
        assert_eq!(cart.total(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn snapshot_uses_plain_array_format() {
        let mut cart = Cart::new();
        cart.add("Red Velvet", 90_000, "img/rv.jpg");
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Red Velvet","price":90000,"image":"img/rv.jpg","quantity":1}]"#
        );
    }
}
