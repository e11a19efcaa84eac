//! The fixed menu catalog.
//!
//! The catalog is an ordered, read-only table of items built once at
//! startup. Nothing in the application mutates it.

use rust_decimal::Decimal;

/// A single item on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Display name (e.g., "Classic Vienna Dog")
    pub name: String,
    /// Unit price in dollars
    pub price: Decimal,
}

impl MenuItem {
    fn new(name: &str, cents: i64) -> Self {
        Self {
            name: name.to_string(),
            price: Decimal::new(cents, 2),
        }
    }
}

/// The ordered list of items offered by the stand.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Builds the standard Drone Dogs menu.
    pub fn standard() -> Self {
        Self {
            items: vec![
                MenuItem::new("Classic Vienna Dog", 199),
                MenuItem::new("Chili Cheese Dog", 299),
                MenuItem::new("Kosher Dog", 399),
                MenuItem::new("Bacon-Wrapped Dog", 599),
                MenuItem::new("Veggie Dog", 399),
            ],
        }
    }

    /// Returns the items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items on the menu.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at the given display position.
    pub fn get(&self, idx: usize) -> Option<&MenuItem> {
        self.items.get(idx)
    }
}
