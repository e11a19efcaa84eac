//! The session cart.
//!
//! An ordered, append-only list of the items the customer has picked.
//! The total is always recomputed from the entries rather than kept as
//! a running counter, so it cannot drift from the list contents.

use rust_decimal::Decimal;

/// One line in the cart. Adding the same menu item twice produces two
/// separate entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// Item name as shown on the menu
    pub name: String,
    /// Unit price at the time the item was added
    pub price: Decimal,
}

impl CartEntry {
    /// Formats the entry as a display line (e.g., "Kosher Dog: $3.99").
    pub fn display_line(&self) -> String {
        format!("{}: ${:.2}", self.name, self.price)
    }
}

/// The cart for the current session. Created empty, lives for the
/// process lifetime, never persisted.
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. There is no limit on cart size and no
    /// duplicate merging.
    pub fn add(&mut self, name: &str, price: Decimal) {
        self.entries.push(CartEntry {
            name: name.to_string(),
            price,
        });
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of lines in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry prices, recomputed from the entries on every
    /// call. An empty cart totals zero.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.price).sum()
    }

    /// The total formatted for display (e.g., "Total: $4.98").
    pub fn total_line(&self) -> String {
        format!("Total: ${:.2}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.total_line(), "Total: $0.00");
    }

    #[test]
    fn test_two_dogs_total() {
        let mut cart = Cart::new();
        cart.add("Classic Vienna Dog", dollars(199));
        cart.add("Chili Cheese Dog", dollars(299));
        assert_eq!(cart.total(), dollars(498));
        assert_eq!(cart.total_line(), "Total: $4.98");
    }

    #[test]
    fn test_duplicates_are_separate_lines() {
        let mut cart = Cart::new();
        cart.add("Veggie Dog", dollars(399));
        cart.add("Veggie Dog", dollars(399));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), dollars(798));
    }

    #[test]
    fn test_total_equals_sum_of_adds() {
        let prices = [199, 299, 399, 599, 399, 199, 599];
        let mut cart = Cart::new();
        let mut expected = Decimal::ZERO;
        for (i, cents) in prices.iter().enumerate() {
            cart.add(&format!("Dog {i}"), dollars(*cents));
            expected += dollars(*cents);
        }
        assert_eq!(cart.len(), prices.len());
        assert_eq!(cart.total(), expected);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add("Kosher Dog", dollars(399));
        cart.add("Bacon-Wrapped Dog", dollars(599));
        let names: Vec<&str> = cart.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Kosher Dog", "Bacon-Wrapped Dog"]);
    }

    #[test]
    fn test_display_line_format() {
        let entry = CartEntry {
            name: "Chili Cheese Dog".to_string(),
            price: dollars(299),
        };
        assert_eq!(entry.display_line(), "Chili Cheese Dog: $2.99");
    }
}
