//! # Domain Types
//!
//! Core domain types used throughout RushMore Pizza.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │   OrderRecord   │   │    OrderUnit    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  key ("1".."8") │   │  orderdatetime  │   │  Box            │       │
//! │  │  name           │   │  customer_name  │   │  Slice          │       │
//! │  │  price (Money)  │   │  pizza_type     │   └─────────────────┘       │
//! │  └─────────────────┘   │  order_type     │                              │
//! │                        │  quantity       │   ┌─────────────────┐       │
//! │                        │  total_price    │   │    TaxRate      │       │
//! │                        │  tax            │   │  bps (u32)      │       │
//! │                        │  discount_...   │   │  750 = 7.5%     │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `OrderRecord.pizza_type` is a copy of the menu name at order time, so the
//! log reads the same even if the menu is renamed later.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::{self, Money};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 750 bps = 7.5%
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a binary fraction.
    ///
    /// `TaxRate::from_bps(750).fraction()` is bit-identical to `0.075`.
    #[inline]
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 10_000.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::SALES_TAX_RATE
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A pizza on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Menu key typed by the cashier ("1".."8").
    pub key: String,

    /// Display name, copied into every order record.
    pub name: String,

    /// Whole-pie price.
    pub price: Money,
}

impl MenuItem {
    pub fn new(key: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        MenuItem {
            key: key.into(),
            name: name.into(),
            price,
        }
    }

    /// Price of one slice: the pie price divided by 8, rounded to the cent.
    pub fn slice_price(&self) -> Money {
        crate::pricing::slice_price(self.price)
    }

    /// Unit price for the chosen order unit.
    pub fn unit_price(&self, unit: OrderUnit) -> Money {
        match unit {
            OrderUnit::Box => self.price,
            OrderUnit::Slice => self.slice_price(),
        }
    }
}

// =============================================================================
// Order Unit
// =============================================================================

/// Whether the customer buys whole pies or single slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderUnit {
    /// A whole pie, sold in a box. Volume discounts apply.
    Box,
    /// One eighth of a pie. Never discounted.
    Slice,
}

impl OrderUnit {
    /// Wire name used in the order log (`"box"` / `"slice"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderUnit::Box => "box",
            OrderUnit::Slice => "slice",
        }
    }

    /// Plural label for summaries: "box(es)" or "slice(s)".
    pub const fn counted_label(&self) -> &'static str {
        match self {
            OrderUnit::Box => "box(es)",
            OrderUnit::Slice => "slice(s)",
        }
    }
}

impl fmt::Display for OrderUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order Record
// =============================================================================

/// Timestamp format used in the order log: `2024-03-09-18:42:07`.
pub const ORDER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

/// One persisted order.
///
/// Field names are the on-disk names; the log is read by other tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Local creation time, second precision.
    #[serde(with = "order_timestamp")]
    pub orderdatetime: NaiveDateTime,

    /// Trimmed, title-cased customer name.
    pub customer_name: String,

    /// Menu name at order time (frozen).
    pub pizza_type: String,

    pub order_type: OrderUnit,

    pub quantity: u32,

    /// Tax-inclusive total.
    #[serde(with = "money::amount")]
    pub total_price: Money,

    #[serde(with = "money::amount")]
    pub tax: Money,

    pub discount_applied: bool,
}

/// Serde adapter for [`ORDER_TIMESTAMP_FORMAT`].
pub mod order_timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::ORDER_TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(ORDER_TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, ORDER_TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> OrderRecord {
        OrderRecord {
            orderdatetime: NaiveDate::from_ymd_opt(2024, 3, 9)
                .and_then(|d| d.and_hms_opt(18, 42, 7))
                .unwrap(),
            customer_name: "Ada Lovelace".to_string(),
            pizza_type: "Classic".to_string(),
            order_type: OrderUnit::Box,
            quantity: 5,
            total_price: Money::from_cents(1645),
            tax: Money::from_cents(115),
            discount_applied: true,
        }
    }

    #[test]
    fn test_tax_rate_fraction_matches_literal() {
        let rate = TaxRate::from_bps(750);
        assert_eq!(rate.fraction(), 0.075);
        assert!((rate.percentage() - 7.5).abs() < f64::EPSILON);
        assert_eq!(TaxRate::default(), rate);
    }

    #[test]
    fn test_order_unit_wire_names() {
        assert_eq!(OrderUnit::Box.as_str(), "box");
        assert_eq!(OrderUnit::Slice.to_string(), "slice");
        assert_eq!(serde_json::to_string(&OrderUnit::Slice).unwrap(), r#""slice""#);
    }

    #[test]
    fn test_unit_price() {
        let item = MenuItem::new("1", "Classic", Money::from_cents(340));
        assert_eq!(item.unit_price(OrderUnit::Box).cents(), 340);
        assert_eq!(item.unit_price(OrderUnit::Slice).cents(), 42);
    }

    #[test]
    fn test_record_wire_format() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "orderdatetime": "2024-03-09-18:42:07",
                "customer_name": "Ada Lovelace",
                "pizza_type": "Classic",
                "order_type": "box",
                "quantity": 5,
                "total_price": 16.45,
                "tax": 1.15,
                "discount_applied": true
            })
        );
    }

    #[test]
    fn test_record_reads_back() {
        let json = r#"{
            "orderdatetime": "2024-03-09-18:42:07",
            "customer_name": "Ada Lovelace",
            "pizza_type": "Classic",
            "order_type": "box",
            "quantity": 5,
            "total_price": 16.45,
            "tax": 1.15,
            "discount_applied": true
        }"#;
        let record: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, sample_record());
    }

    #[test]
    fn test_record_rejects_bad_timestamp() {
        let json = r#"{
            "orderdatetime": "2024/03/09 18:42",
            "customer_name": "A", "pizza_type": "Classic", "order_type": "box",
            "quantity": 1, "total_price": 3.66, "tax": 0.26, "discount_applied": false
        }"#;
        assert!(serde_json::from_str::<OrderRecord>(json).is_err());
    }
}
