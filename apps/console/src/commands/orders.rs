//! View all orders (`v`).

use rushmore_store::{OrderListing, OrderStore, StorageBackend};

use crate::error::AppResult;
use crate::prompt::Prompter;

/// Prints every stored order, oldest first.
pub fn view_orders<B, P>(store: &OrderStore<B>, prompter: &mut P) -> AppResult<()>
where
    B: StorageBackend,
    P: Prompter,
{
    match store.list_all()? {
        OrderListing::NoStore => prompter.say("No orders have been placed yet.")?,
        OrderListing::Unreadable => {
            prompter.say("No orders found or the order database is empty.")?
        }
        OrderListing::Orders(orders) if orders.is_empty() => prompter.say("No orders found.")?,
        OrderListing::Orders(orders) => {
            for order in &orders {
                prompter.say(&order.listing_line())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use rushmore_store::MemoryBackend;

    fn shown(store: OrderStore<MemoryBackend>) -> Vec<String> {
        let mut prompter = ScriptedPrompter::default();
        view_orders(&store, &mut prompter).unwrap();
        prompter.transcript().to_vec()
    }

    #[test]
    fn test_messages_for_missing_empty_and_corrupt() {
        assert_eq!(
            shown(OrderStore::new(MemoryBackend::new())),
            ["No orders have been placed yet."]
        );
        assert_eq!(
            shown(OrderStore::new(MemoryBackend::with_contents("[]"))),
            ["No orders found."]
        );
        assert_eq!(
            shown(OrderStore::new(MemoryBackend::with_contents("[{"))),
            ["No orders found or the order database is empty."]
        );
    }

    #[test]
    fn test_lists_in_order_with_placeholders() {
        let doc = r#"[
            {"orderdatetime": "2025-06-01-12:30:00", "customer_name": "Ada", "pizza_type": "Classic",
             "order_type": "box", "quantity": 5, "total_price": 16.45},
            {"customer_name": "Bo", "pizza_type": "Deluxe", "quantity": 10, "total_price": 51.6}
        ]"#;
        assert_eq!(
            shown(OrderStore::new(MemoryBackend::with_contents(doc))),
            [
                "Order at 2025-06-01-12:30:00 by Ada: 5 Classic (box) - $16.45",
                "Order at N/A by Bo: 10 Deluxe (N/A) - $51.6",
            ]
        );
    }
}
