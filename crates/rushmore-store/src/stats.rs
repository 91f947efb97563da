//! # Order Statistics
//!
//! Aggregates over the stored orders: how many, how much, and which pizza
//! sells best.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total_orders   every element of the array, well formed or not          │
//! │  total_revenue  Σ total_price as f64, rounded to the cent once at the   │
//! │                 end; missing or non-numeric counts as 0                 │
//! │  most_ordered   most frequent pizza_type string; on a tie the name      │
//! │                 seen first wins; no names at all → ("None", 0)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::Serialize;

use rushmore_core::money::{self, Money};

use crate::stored::StoredOrder;

/// Name reported as most ordered when there is nothing to count.
pub const NO_PIZZA: &str = "None";

/// The best-selling pizza and how many orders named it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostOrdered {
    pub name: String,
    pub count: usize,
}

impl MostOrdered {
    pub fn none() -> Self {
        MostOrdered {
            name: NO_PIZZA.to_string(),
            count: 0,
        }
    }
}

/// Aggregate view of the order log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub total_orders: usize,
    #[serde(with = "money::amount")]
    pub total_revenue: Money,
    pub most_ordered: MostOrdered,
}

impl OrderStats {
    /// Statistics of an empty log.
    pub fn empty() -> Self {
        OrderStats {
            total_orders: 0,
            total_revenue: Money::zero(),
            most_ordered: MostOrdered::none(),
        }
    }

    /// Computes statistics over stored orders, in log order.
    pub fn compute(orders: &[StoredOrder]) -> Self {
        let revenue: f64 = orders.iter().map(StoredOrder::total_price).sum();

        OrderStats {
            total_orders: orders.len(),
            total_revenue: Money::from_amount(revenue),
            most_ordered: most_ordered(orders),
        }
    }
}

impl Default for OrderStats {
    fn default() -> Self {
        OrderStats::empty()
    }
}

/// Counts pizza names in first-seen order and picks the largest count.
fn most_ordered(orders: &[StoredOrder]) -> MostOrdered {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for name in orders.iter().filter_map(StoredOrder::pizza_type) {
        match slots.get(name) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(name, counts.len());
                counts.push((name, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(name, count) in &counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((name, count));
        }
    }

    match best {
        Some((name, count)) => MostOrdered {
            name: name.to_string(),
            count,
        },
        None => MostOrdered::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(pizza: &str, total: f64) -> StoredOrder {
        StoredOrder::new(json!({"pizza_type": pizza, "total_price": total}))
    }

    #[test]
    fn test_empty() {
        let stats = OrderStats::compute(&[]);
        assert_eq!(stats, OrderStats::empty());
        assert_eq!(stats.most_ordered.name, "None");
        assert_eq!(stats.total_revenue.to_string(), "$0.00");
    }

    #[test]
    fn test_counts_and_revenue() {
        let orders = [
            order("Classic", 16.45),
            order("Deluxe", 51.6),
            order("Classic", 3.66),
        ];
        let stats = OrderStats::compute(&orders);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue.cents(), 7171);
        assert_eq!(
            stats.most_ordered,
            MostOrdered {
                name: "Classic".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn test_serializes_revenue_as_amount() {
        let stats = OrderStats::compute(&[order("Deluxe", 51.6), order("Classic", 16.45)]);
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "total_orders": 2,
                "total_revenue": 68.05,
                "most_ordered": {"name": "Deluxe", "count": 1}
            })
        );
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let orders = [
            order("Deluxe", 1.0),
            order("Classic", 1.0),
            order("Classic", 1.0),
            order("Deluxe", 1.0),
        ];
        assert_eq!(OrderStats::compute(&orders).most_ordered.name, "Deluxe");
    }

    #[test]
    fn test_malformed_orders_still_counted() {
        let orders = [
            StoredOrder::new(json!({"total_price": "12"})),
            StoredOrder::new(json!("not an order")),
            order("Cheese", 5.38),
        ];
        let stats = OrderStats::compute(&orders);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue.cents(), 538);
        assert_eq!(stats.most_ordered.count, 1);
    }

    #[test]
    fn test_name_match_is_exact() {
        let orders = [order("classic", 1.0), order("Classic", 1.0), order("Classic ", 1.0)];
        let stats = OrderStats::compute(&orders);
        assert_eq!(stats.most_ordered.name, "classic");
        assert_eq!(stats.most_ordered.count, 1);
    }
}
