//! # rushmore-store: Order Store for RushMore Pizza
//!
//! This crate keeps every order the console takes, as one JSON array in one
//! file (`pizza_orders.json` by default).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RushMore Pizza Data Flow                           │
//! │                                                                         │
//! │  Console (place order / view orders / stats)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 rushmore-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  OrderStore   │    │   document    │    │   backend    │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ append        │───►│ parse / write │    │ FileBackend  │  │   │
//! │  │   │ list_all      │    │ corrupt → []  │    │ MemoryBackend│  │   │
//! │  │   │ stats         │───────────────────────►│ load / save  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     pizza_orders.json                           │   │
//! │  │   [ { "orderdatetime": ..., "customer_name": ..., ... }, ... ]  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - Where the bytes live (file or memory)
//! - [`document`] - Parsing and writing the JSON array
//! - [`stored`] - Lenient view of one stored order
//! - [`stats`] - Order count, revenue and most ordered pizza
//! - [`order_store`] - The store itself
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rushmore_store::{FileBackend, OrderStore};
//!
//! let mut store = OrderStore::new(FileBackend::new("pizza_orders.json"));
//! store.append(&record)?;
//!
//! let stats = store.stats()?;
//! println!("{} orders, {}", stats.total_orders, stats.total_revenue);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod document;
pub mod error;
pub mod order_store;
pub mod stats;
pub mod stored;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use document::OrderDocument;
pub use error::{StoreError, StoreResult};
pub use order_store::{AppendOutcome, OrderListing, OrderStore};
pub use stats::{MostOrdered, OrderStats};
pub use stored::StoredOrder;

/// Default order file name, relative to the working directory.
pub const DEFAULT_ORDERS_FILE: &str = "pizza_orders.json";
