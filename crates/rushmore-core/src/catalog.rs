//! # Catalog
//!
//! The fixed pizza menu. Built once at startup and passed by reference to
//! whoever needs to look a pizza up; nothing mutates it afterwards.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::MenuItem;

/// The standard RushMore menu: (key, name, whole-pie price in cents).
const STANDARD_MENU: [(&str, &str, i64); 8] = [
    ("1", "Classic", 340),
    ("2", "Chicken", 450),
    ("3", "Pepperoni", 400),
    ("4", "Deluxe", 600),
    ("5", "Vegetable", 400),
    ("6", "Chocolate", 1200),
    ("7", "Cheese", 500),
    ("8", "Meat-feast", 750),
];

/// Immutable, ordered lookup table of menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// The eight pizzas on the RushMore menu.
    pub fn standard() -> Self {
        let items = STANDARD_MENU
            .iter()
            .map(|(key, name, cents)| MenuItem::new(*key, *name, Money::from_cents(*cents)))
            .collect();
        Catalog { items }
    }

    /// Looks up a menu item by its key.
    pub fn get(&self, key: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Like [`Catalog::get`], but a missing key is an error.
    pub fn lookup(&self, key: &str) -> CoreResult<&MenuItem> {
        self.get(key)
            .ok_or_else(|| CoreError::PizzaNotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Menu items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}
