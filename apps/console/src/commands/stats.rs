//! Order statistics (`stats`).

use tracing::warn;

use rushmore_store::{OrderStats, OrderStore, StorageBackend, StoreError};

use crate::config::ConsoleConfig;
use crate::error::AppResult;
use crate::prompt::Prompter;

/// Prints order count, best seller and revenue.
///
/// A corrupt order file is reported here and not passed up as an error.
pub fn view_stats<B, P>(
    store: &OrderStore<B>,
    config: &ConsoleConfig,
    prompter: &mut P,
) -> AppResult<()>
where
    B: StorageBackend,
    P: Prompter,
{
    match store.stats_if_present() {
        Ok(None) => prompter.say("No stats to show. No orders placed yet.")?,
        Ok(Some(stats)) => print_stats(&stats, config, prompter)?,
        Err(StoreError::Corrupt(err)) => {
            warn!(error = %err, "Cannot compute stats from a corrupt order file");
            prompter.say("Error reading stats.")?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn print_stats<P: Prompter>(
    stats: &OrderStats,
    config: &ConsoleConfig,
    prompter: &mut P,
) -> AppResult<()> {
    prompter.say("")?;
    prompter.say("--- Order Stats ---")?;
    prompter.say(&format!("Total Orders: {}", stats.total_orders))?;
    prompter.say(&format!(
        "Most Ordered Pizza: {} ({} times)",
        stats.most_ordered.name, stats.most_ordered.count
    ))?;
    prompter.say(&format!(
        "Total Revenue: {}",
        config.format_currency(stats.total_revenue)
    ))?;
    prompter.say("")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use rushmore_store::MemoryBackend;

    fn shown(backend: MemoryBackend) -> Vec<String> {
        let store = OrderStore::new(backend);
        let mut prompter = ScriptedPrompter::default();
        view_stats(&store, &ConsoleConfig::default(), &mut prompter).unwrap();
        prompter.transcript().to_vec()
    }

    #[test]
    fn test_missing_and_corrupt() {
        assert_eq!(shown(MemoryBackend::new()), ["No stats to show. No orders placed yet."]);
        assert_eq!(shown(MemoryBackend::with_contents("nope")), ["Error reading stats."]);
    }

    #[test]
    fn test_empty_array_prints_zeroes() {
        assert_eq!(
            shown(MemoryBackend::with_contents("[]")),
            [
                "",
                "--- Order Stats ---",
                "Total Orders: 0",
                "Most Ordered Pizza: None (0 times)",
                "Total Revenue: $0.00",
                "",
            ]
        );
    }

    #[test]
    fn test_stats_printout() {
        let doc = r#"[
            {"pizza_type": "Deluxe", "total_price": 51.6},
            {"pizza_type": "Classic", "total_price": 16.45},
            {"pizza_type": "Deluxe", "total_price": 29.02}
        ]"#;
        let lines = shown(MemoryBackend::with_contents(doc));
        assert!(lines.contains(&"Total Orders: 3".to_string()));
        assert!(lines.contains(&"Most Ordered Pizza: Deluxe (2 times)".to_string()));
        assert!(lines.contains(&"Total Revenue: $97.07".to_string()));
    }
}
