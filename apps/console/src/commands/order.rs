//! # Order Command
//!
//! Takes one order for a chosen pizza and appends it to the store.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Please enter your name: ─── blank ──► "Invalid name. Cancelling order."│
//! │       │                                                                 │
//! │  You selected Classic!                                                 │
//! │  Price: $3.40 per box | $0.42 per slice                                 │
//! │       │                                                                 │
//! │  Select 'B' for Box or 'S' for Slice ── Q ──► "Cancelled selection."    │
//! │       │            └── other ──► "Invalid choice..." → ask again        │
//! │       │                                                                 │
//! │  How many boxes do you want? ── q ──► "Cancelled box order."            │
//! │       │            └── bad ──► hint → ask again                         │
//! │       ▼                                                                 │
//! │  --- Order Summary --- ──► append to store                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! End of input at any prompt cancels the order. Nothing is written unless
//! the summary was shown.

use chrono::NaiveDateTime;
use tracing::info;

use rushmore_core::session::{CancelReason, PricedOrder, Step};
use rushmore_core::{
    MenuItem, OrderRecord, OrderSession, OrderUnit, ValidationError, SALES_TAX_RATE,
};
use rushmore_store::{OrderStore, StorageBackend};

use crate::config::ConsoleConfig;
use crate::error::AppResult;
use crate::prompt::Prompter;

pub const NAME_PROMPT: &str = "Please enter your name: ";
pub const UNIT_PROMPT: &str = "Select 'B' for Box or 'S' for Slice (or 'q' to cancel): ";

/// How an order attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Priced, shown and saved.
    Placed(OrderRecord),
    /// Abandoned before pricing; nothing saved.
    Cancelled(CancelReason),
}

/// Everything the order command needs.
pub struct OrderContext<'a, B, P> {
    pub config: &'a ConsoleConfig,
    pub store: &'a mut OrderStore<B>,
    pub prompter: &'a mut P,
    pub clock: fn() -> NaiveDateTime,
}

/// Runs one order for `item`.
pub fn take_order<B, P>(item: &MenuItem, ctx: OrderContext<'_, B, P>) -> AppResult<OrderOutcome>
where
    B: StorageBackend,
    P: Prompter,
{
    let OrderContext {
        config,
        store,
        prompter,
        clock,
    } = ctx;
    let mut session = OrderSession::new(item);

    // Name
    let Some(name) = prompter.ask(NAME_PROMPT)? else {
        return input_closed(&mut session, prompter);
    };
    if let Step::Cancelled(reason) = session.submit_name(&name)? {
        prompter.say("Invalid name. Cancelling order.")?;
        return Ok(OrderOutcome::Cancelled(reason));
    }

    prompter.say(&format!("You selected {}!", item.name))?;
    prompter.say(&format!(
        "Price: {} per box | {} per slice",
        config.format_currency(item.price),
        config.format_currency(item.slice_price()),
    ))?;

    // Box or slice
    loop {
        let Some(answer) = prompter.ask(UNIT_PROMPT)? else {
            return input_closed(&mut session, prompter);
        };
        match session.submit_unit(&answer)? {
            Step::Advanced => break,
            Step::Retry(_) => prompter.say("Invalid choice. Please select 'B', 'S', or 'q'.")?,
            Step::Cancelled(reason) => {
                prompter.say("Cancelled selection.")?;
                return Ok(OrderOutcome::Cancelled(reason));
            }
        }
    }

    let unit = session.chosen_unit()?;

    // Quantity
    let question = format!("How many {} do you want? (or type 'q' to cancel): ", unit_noun(unit));
    loop {
        let Some(answer) = prompter.ask(&question)? else {
            return input_closed(&mut session, prompter);
        };
        match session.submit_quantity(&answer)? {
            Step::Advanced => break,
            Step::Retry(ValidationError::MustBePositive { .. }) => {
                prompter.say("Quantity must be greater than 0.")?
            }
            Step::Retry(_) => prompter.say("Please enter a valid positive number.")?,
            Step::Cancelled(reason) => {
                prompter.say(&format!("Cancelled {} order.", unit.as_str()))?;
                return Ok(OrderOutcome::Cancelled(reason));
            }
        }
    }

    // Price, show, save
    let priced = session.price()?;
    print_summary(&priced, config, prompter)?;

    let record = session.record(clock())?;
    store.append(&record)?;
    session.mark_persisted(record.clone())?;

    info!(
        customer = %record.customer_name,
        pizza = %record.pizza_type,
        unit = %record.order_type,
        quantity = record.quantity,
        total = %record.total_price,
        "Order placed"
    );
    Ok(OrderOutcome::Placed(record))
}

/// Prints the order summary block.
pub fn print_summary<P: Prompter>(
    priced: &PricedOrder,
    config: &ConsoleConfig,
    prompter: &mut P,
) -> AppResult<()> {
    let payment = &priced.payment;

    prompter.say("")?;
    prompter.say("--- Order Summary ---")?;
    prompter.say(&format!("Customer: {}", priced.customer_name))?;
    prompter.say(&format!("Pizza: {}", priced.pizza_name))?;
    prompter.say(&format!(
        "Quantity: {} {}",
        priced.quantity,
        priced.unit.counted_label()
    ))?;
    if payment.discount_applied() {
        prompter.say(&format!(
            "Discount Applied: {}% (-{})",
            payment.discount_rate.whole_percent(),
            config.format_currency(payment.discount)
        ))?;
    } else {
        prompter.say("Discount Applied: None")?;
    }
    prompter.say(&format!("Subtotal: {}", config.format_currency(payment.subtotal)))?;
    prompter.say(&format!(
        "Tax ({}%): {}",
        SALES_TAX_RATE.percentage(),
        config.format_currency(payment.tax)
    ))?;
    prompter.say(&format!("Total: {}", config.format_currency(payment.total)))?;
    prompter.say("")?;
    Ok(())
}

fn unit_noun(unit: OrderUnit) -> &'static str {
    match unit {
        OrderUnit::Box => "boxes",
        OrderUnit::Slice => "slices",
    }
}

fn input_closed<P: Prompter>(
    session: &mut OrderSession,
    prompter: &mut P,
) -> AppResult<OrderOutcome> {
    session.cancel()?;
    prompter.say("")?;
    prompter.say("Input closed. Cancelling order.")?;
    Ok(OrderOutcome::Cancelled(CancelReason::Aborted))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use chrono::NaiveDate;
    use rushmore_core::Catalog;
    use rushmore_store::{MemoryBackend, OrderListing};

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .unwrap()
    }

    fn run(
        key: &str,
        answers: &[&str],
    ) -> (AppResult<OrderOutcome>, OrderStore<MemoryBackend>, ScriptedPrompter) {
        let catalog = Catalog::standard();
        let config = ConsoleConfig::default();
        let mut store = OrderStore::new(MemoryBackend::new());
        let mut prompter = ScriptedPrompter::new(answers.iter().copied());

        let outcome = take_order(
            catalog.get(key).unwrap(),
            OrderContext {
                config: &config,
                store: &mut store,
                prompter: &mut prompter,
                clock: fixed_clock,
            },
        );
        (outcome, store, prompter)
    }

    #[test]
    fn test_box_order_with_discount() {
        let (outcome, store, prompter) = run("1", &["ada lovelace", "b", "5"]);

        let OrderOutcome::Placed(record) = outcome.unwrap() else {
            panic!("order should be placed");
        };
        assert_eq!(record.customer_name, "Ada Lovelace");
        assert_eq!(record.total_price.cents(), 1645);
        assert_eq!(record.orderdatetime, fixed_clock());

        for line in [
            "You selected Classic!",
            "Price: $3.40 per box | $0.42 per slice",
            "--- Order Summary ---",
            "Customer: Ada Lovelace",
            "Pizza: Classic",
            "Quantity: 5 box(es)",
            "Discount Applied: 10% (-$1.70)",
            "Subtotal: $17.00",
            "Tax (7.5%): $1.15",
            "Total: $16.45",
        ] {
            assert!(prompter.said(line), "missing {line:?} in {:#?}", prompter.transcript());
        }

        let OrderListing::Orders(orders) = store.list_all().unwrap() else {
            panic!("expected orders");
        };
        assert_eq!(orders.len(), 1);
    }

    #[test]
    fn test_slice_order_has_no_discount() {
        let (outcome, _, prompter) = run("8", &["Lin", "S", "10"]);
        assert!(matches!(outcome.unwrap(), OrderOutcome::Placed(r) if !r.discount_applied));
        assert!(prompter.said("Quantity: 10 slice(s)"));
        assert!(prompter.said("Discount Applied: None"));
        assert!(prompter.said("Subtotal: $9.40"));
    }

    #[test]
    fn test_retries_then_succeeds() {
        let (outcome, _, prompter) = run("4", &["Bo", "x", "B", "0", "two", "-1", "10"]);
        let OrderOutcome::Placed(record) = outcome.unwrap() else {
            panic!("order should be placed");
        };
        assert_eq!(record.total_price.cents(), 5160);
        assert!(prompter.said("Invalid choice. Please select 'B', 'S', or 'q'."));
        assert!(prompter.said("Quantity must be greater than 0."));
        assert!(prompter.said("Please enter a valid positive number."));
        assert!(prompter.said("Discount Applied: 20% (-$12.00)"));
    }

    #[test]
    fn test_cancel_at_quantity_leaves_store_unchanged() {
        let (outcome, store, prompter) = run("2", &["Cy", "B", "q"]);
        assert_eq!(
            outcome.unwrap(),
            OrderOutcome::Cancelled(CancelReason::AtQuantityPrompt)
        );
        assert!(prompter.said("Cancelled box order."));
        assert!(!prompter.said("--- Order Summary ---"));
        assert!(store.backend().contents().is_none());
    }

    #[test]
    fn test_cancel_at_unit_prompt() {
        let (outcome, store, prompter) = run("2", &["Cy", "q"]);
        assert_eq!(outcome.unwrap(), OrderOutcome::Cancelled(CancelReason::AtUnitPrompt));
        assert!(prompter.said("Cancelled selection."));
        assert!(store.backend().contents().is_none());
    }

    #[test]
    fn test_blank_name_cancels() {
        let (outcome, _, prompter) = run("3", &["   "]);
        assert_eq!(outcome.unwrap(), OrderOutcome::Cancelled(CancelReason::InvalidName));
        assert!(prompter.said("Invalid name. Cancelling order."));
        assert!(!prompter.said("You selected Pepperoni!"));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (outcome, store, prompter) = run("6", &["Dee", "S"]);
        assert_eq!(outcome.unwrap(), OrderOutcome::Cancelled(CancelReason::Aborted));
        assert!(prompter.said("Input closed. Cancelling order."));
        assert!(store.backend().contents().is_none());
    }
}
