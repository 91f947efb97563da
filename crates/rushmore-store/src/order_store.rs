//! # Order Store
//!
//! Repository over a [`StorageBackend`] holding the order log.
//!
//! ## Append Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       append(record)                                    │
//! │                                                                         │
//! │  1. LOAD        backend.load()            (no cache, read every time)   │
//! │  2. PARSE       parse_document()          corrupt → [] + warning        │
//! │  3. PUSH        records.push(record)      earlier records untouched     │
//! │  4. WRITE       backend.save(whole doc)   truncate and rewrite          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is one writer (the console) and no locking. Listing never repairs
//! a corrupt document; only the next append replaces it.

use tracing::{debug, info, warn};

use rushmore_core::OrderRecord;

use crate::backend::StorageBackend;
use crate::document::{parse_document, render_document, OrderDocument};
use crate::error::{StoreError, StoreResult};
use crate::stats::OrderStats;
use crate::stored::StoredOrder;

/// What `append` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Records in the document after the append.
    pub total_records: usize,
    /// True if a corrupt document was discarded.
    pub recovered_from_corrupt: bool,
}

/// What `list_all` found.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderListing {
    /// No order file yet.
    NoStore,
    /// An order file that could not be parsed.
    Unreadable,
    /// Every stored order, in insertion order (may be empty).
    Orders(Vec<StoredOrder>),
}

/// The order log.
#[derive(Debug, Clone)]
pub struct OrderStore<B> {
    backend: B,
}

impl<B: StorageBackend> OrderStore<B> {
    /// Creates a store over `backend`.
    pub fn new(backend: B) -> Self {
        OrderStore { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads and classifies the current document.
    pub fn load_document(&self) -> StoreResult<OrderDocument> {
        let bytes = self.backend.load()?;
        Ok(parse_document(bytes.as_deref()))
    }

    /// Appends one record, rewriting the whole document.
    pub fn append(&mut self, record: &OrderRecord) -> StoreResult<AppendOutcome> {
        let document = self.load_document()?;
        let recovered_from_corrupt = match &document {
            OrderDocument::Corrupt(err) => {
                warn!(
                    store = %self.backend.describe(),
                    error = %err,
                    "Order file is corrupt, starting a new order list"
                );
                true
            }
            _ => false,
        };

        let mut records = document.into_records();
        records.push(serde_json::to_value(record).map_err(StoreError::Serialize)?);

        let bytes = render_document(&records)?;
        self.backend.save(&bytes)?;

        info!(
            customer = %record.customer_name,
            pizza = %record.pizza_type,
            quantity = record.quantity,
            total = %record.total_price,
            records = records.len(),
            "Order saved"
        );

        Ok(AppendOutcome {
            total_records: records.len(),
            recovered_from_corrupt,
        })
    }

    /// Reads every stored order without modifying anything.
    pub fn list_all(&self) -> StoreResult<OrderListing> {
        let listing = match self.load_document()? {
            OrderDocument::Missing => OrderListing::NoStore,
            OrderDocument::Corrupt(err) => {
                debug!(store = %self.backend.describe(), error = %err, "Order file unreadable");
                OrderListing::Unreadable
            }
            OrderDocument::Records(records) => {
                OrderListing::Orders(records.into_iter().map(StoredOrder::new).collect())
            }
        };
        Ok(listing)
    }

    /// Aggregate statistics.
    ///
    /// A missing document gives [`OrderStats::empty`]; a corrupt one is
    /// [`StoreError::Corrupt`].
    pub fn stats(&self) -> StoreResult<OrderStats> {
        Ok(self.stats_if_present()?.unwrap_or_default())
    }

    /// Like [`OrderStore::stats`], but `None` when there is no document yet.
    pub fn stats_if_present(&self) -> StoreResult<Option<OrderStats>> {
        match self.load_document()? {
            OrderDocument::Missing => Ok(None),
            OrderDocument::Corrupt(err) => Err(StoreError::Corrupt(err)),
            OrderDocument::Records(records) => {
                let orders: Vec<StoredOrder> = records.into_iter().map(StoredOrder::new).collect();
                Ok(Some(OrderStats::compute(&orders)))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FileBackend, MemoryBackend};
    use chrono::NaiveDate;
    use rushmore_core::{Money, OrderUnit};
    use serde_json::Value;
    use tempfile::TempDir;

    fn record(customer: &str, pizza: &str, total_cents: i64) -> OrderRecord {
        OrderRecord {
            orderdatetime: NaiveDate::from_ymd_opt(2024, 3, 9)
                .and_then(|d| d.and_hms_opt(18, 42, 7))
                .unwrap(),
            customer_name: customer.to_string(),
            pizza_type: pizza.to_string(),
            order_type: OrderUnit::Box,
            quantity: 1,
            total_price: Money::from_cents(total_cents),
            tax: Money::from_cents(26),
            discount_applied: false,
        }
    }

    fn orders<B: StorageBackend>(store: &OrderStore<B>) -> Vec<StoredOrder> {
        match store.list_all().unwrap() {
            OrderListing::Orders(orders) => orders,
            other => panic!("expected orders, got {other:?}"),
        }
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = OrderStore::new(MemoryBackend::new());
        for (i, name) in ["Ann", "Ben", "Cat", "Dan"].iter().enumerate() {
            let outcome = store.append(&record(name, "Classic", 366)).unwrap();
            assert_eq!(outcome.total_records, i + 1);
            assert!(!outcome.recovered_from_corrupt);
        }

        let names: Vec<String> = orders(&store)
            .iter()
            .map(|o| o.display_field("customer_name"))
            .collect();
        assert_eq!(names, ["Ann", "Ben", "Cat", "Dan"]);
    }

    #[test]
    fn test_append_over_corrupt_document() {
        let mut store = OrderStore::new(MemoryBackend::with_contents("[{\"broken\": "));
        assert_eq!(store.list_all().unwrap(), OrderListing::Unreadable);
        assert!(store.stats().unwrap_err().is_corrupt());

        let outcome = store.append(&record("Ann", "Classic", 366)).unwrap();
        assert!(outcome.recovered_from_corrupt);
        assert_eq!(outcome.total_records, 1);
        assert_eq!(orders(&store).len(), 1);
    }

    #[test]
    fn test_append_preserves_unknown_fields() {
        let existing = r#"[{"customer_name": "Old", "loyalty": {"points": 12}}]"#;
        let mut store = OrderStore::new(MemoryBackend::with_contents(existing));
        store.append(&record("New", "Cheese", 538)).unwrap();

        let all = orders(&store);
        assert_eq!(all[0].field("loyalty"), Some(&serde_json::json!({"points": 12})));
        assert_eq!(all[1].display_field("customer_name"), "New");
    }

    #[test]
    fn test_list_missing_and_empty() {
        let store = OrderStore::new(MemoryBackend::new());
        assert_eq!(store.list_all().unwrap(), OrderListing::NoStore);

        let store = OrderStore::new(MemoryBackend::with_contents("[]"));
        assert_eq!(store.list_all().unwrap(), OrderListing::Orders(Vec::new()));
    }

    #[test]
    fn test_list_does_not_repair() {
        let store = OrderStore::new(MemoryBackend::with_contents("oops"));
        store.list_all().unwrap();
        assert_eq!(store.backend().contents(), Some(&b"oops"[..]));
    }

    #[test]
    fn test_stats_on_missing_and_empty() {
        let store = OrderStore::new(MemoryBackend::new());
        assert_eq!(store.stats().unwrap(), OrderStats::empty());
        assert!(store.stats_if_present().unwrap().is_none());

        let store = OrderStore::new(MemoryBackend::with_contents("[]"));
        assert!(store.stats_if_present().unwrap().is_some());
        let stats = store.stats().unwrap();
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_revenue, Money::zero());
        assert_eq!(stats.most_ordered.name, "None");
    }

    #[test]
    fn test_stats_after_appends() {
        let mut store = OrderStore::new(MemoryBackend::new());
        store.append(&record("Ann", "Deluxe", 5160)).unwrap();
        store.append(&record("Ben", "Classic", 1645)).unwrap();
        store.append(&record("Cat", "Deluxe", 2902)).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue.cents(), 9707);
        assert_eq!(stats.most_ordered.name, "Deluxe");
        assert_eq!(stats.most_ordered.count, 2);
    }

    #[test]
    fn test_written_record_format() {
        let mut store = OrderStore::new(MemoryBackend::new());
        store.append(&record("Ann", "Classic", 366)).unwrap();

        let text = std::str::from_utf8(store.backend().contents().unwrap()).unwrap();
        assert!(text.starts_with("[\n    {\n        \"orderdatetime\": \"2024-03-09-18:42:07\","));
        assert!(text.contains("\"total_price\": 3.66,"));

        let parsed: Vec<Value> = serde_json::from_str(text).unwrap();
        let keys: Vec<&str> = parsed[0].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "orderdatetime",
                "customer_name",
                "pizza_type",
                "order_type",
                "quantity",
                "total_price",
                "tax",
                "discount_applied"
            ]
        );
    }

    #[test]
    fn test_file_backed_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pizza_orders.json");

        let mut store = OrderStore::new(FileBackend::new(&path));
        assert_eq!(store.list_all().unwrap(), OrderListing::NoStore);
        store.append(&record("Ann", "Classic", 366)).unwrap();
        store.append(&record("Ben", "Classic", 366)).unwrap();

        let reopened = OrderStore::new(FileBackend::new(&path));
        assert_eq!(orders(&reopened).len(), 2);
        assert_eq!(reopened.stats().unwrap().total_revenue.cents(), 732);
    }

    #[test]
    fn test_file_backed_corrupt_then_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pizza_orders.json");
        std::fs::write(&path, "{\"not\": \"an array\"}").unwrap();

        let mut store = OrderStore::new(FileBackend::new(&path));
        store.append(&record("Ann", "Classic", 366)).unwrap();

        let parsed: Vec<Value> = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
