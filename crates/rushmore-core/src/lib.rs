//! # rushmore-core: Pure Business Logic for RushMore Pizza
//!
//! This crate is the **heart** of the order console. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RushMore Pizza Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Menu ──► Name ──► Box/Slice ──► Quantity ──► Summary         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ rushmore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ │   │
//! │  │   │  types  │ │  money  │ │ pricing │ │validation│ │ session │ │   │
//! │  │   │ Record  │ │  Money  │ │ Payment │ │  names   │ │  state  │ │   │
//! │  │   │ Catalog │ │ cents   │ │ tiers   │ │  qty     │ │ machine │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 rushmore-store (Order Store)                    │   │
//! │  │            pizza_orders.json: append, list, stats               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, OrderUnit, OrderRecord, rates)
//! - [`money`] - Money type and the cent rounding used by pricing
//! - [`catalog`] - The fixed pizza menu
//! - [`pricing`] - Payment breakdown and discount tiers
//! - [`validation`] - Customer name, quantity and unit token checks
//! - [`session`] - Order session state machine
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rushmore_core::catalog::Catalog;
//! use rushmore_core::pricing::{compute_payment, DiscountRate};
//!
//! let catalog = Catalog::standard();
//! let classic = catalog.get("1").unwrap();
//!
//! let payment = compute_payment(classic.price, 5, DiscountRate::for_box_quantity(5));
//! assert_eq!(payment.total.cents(), 1645); // $16.45
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::{compute_payment, DiscountRate, PaymentBreakdown};
pub use session::{CancelReason, OrderSession, PricedOrder, SessionState, Step};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every order: 750 bps = 7.5%.
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(750);

/// Number of billable slices in one whole pie.
pub const SLICES_PER_PIE: i64 = 8;

/// Box quantity at which the 10% volume discount starts.
pub const TEN_PERCENT_TIER_QUANTITY: u32 = 5;

/// Box quantity at which the 20% volume discount starts.
pub const TWENTY_PERCENT_TIER_QUANTITY: u32 = 10;
