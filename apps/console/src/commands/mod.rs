//! # Console Commands
//!
//! One module per menu option.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (menu command parsing)
//! ├── order.rs    ◄─── Take one order: name, box/slice, quantity, summary
//! ├── orders.rs   ◄─── View all orders ('v')
//! └── stats.rs    ◄─── Order statistics ('stats')
//! ```
//!
//! Commands take only what they need (catalog, store, prompter, config)
//! and never loop back to the menu themselves; the shell does that.

pub mod order;
pub mod orders;
pub mod stats;

use rushmore_core::Catalog;

/// What the cashier asked for at the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// Start an order for the menu key.
    Order(String),
    /// `v`
    ViewOrders,
    /// `stats`
    Stats,
    /// `q`
    Quit,
    /// Anything else.
    Invalid(String),
}

impl MenuCommand {
    /// Parses a menu answer: trimmed and case-insensitive.
    pub fn parse(raw: &str, catalog: &Catalog) -> Self {
        let choice = raw.trim().to_lowercase();
        match choice.as_str() {
            "q" => MenuCommand::Quit,
            "v" => MenuCommand::ViewOrders,
            "stats" => MenuCommand::Stats,
            key if catalog.contains(key) => MenuCommand::Order(choice),
            _ => MenuCommand::Invalid(choice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_commands() {
        let catalog = Catalog::standard();
        assert_eq!(MenuCommand::parse("q", &catalog), MenuCommand::Quit);
        assert_eq!(MenuCommand::parse(" V ", &catalog), MenuCommand::ViewOrders);
        assert_eq!(MenuCommand::parse("STATS", &catalog), MenuCommand::Stats);
        assert_eq!(
            MenuCommand::parse("4\n", &catalog),
            MenuCommand::Order("4".to_string())
        );
    }

    #[test]
    fn test_parse_invalid() {
        let catalog = Catalog::standard();
        for raw in ["9", "0", "", "quit", "stat", "1 2"] {
            assert!(
                matches!(MenuCommand::parse(raw, &catalog), MenuCommand::Invalid(_)),
                "{raw:?}"
            );
        }
    }
}
