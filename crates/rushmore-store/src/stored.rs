//! # Stored Orders
//!
//! A lenient, read-only view of one element of the order document.
//!
//! The order file may have been edited by hand or written by an older
//! build, so nothing here assumes a field exists or has the right type:
//!
//! - a missing field displays as `N/A`
//! - strings display without quotes, other JSON values as JSON text
//! - an element that is not an object has every field missing
//!
//! [`StoredOrder::to_record`] is the strict path back to
//! [`OrderRecord`] when every field is well formed.

use serde_json::Value;

use rushmore_core::OrderRecord;

/// Placeholder for a missing field.
pub const MISSING_FIELD: &str = "N/A";

/// One element of the stored order array.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredOrder {
    value: Value,
}

impl StoredOrder {
    pub fn new(value: Value) -> Self {
        StoredOrder { value }
    }

    /// Field `name`, if this element is an object that has it.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.value.as_object().and_then(|fields| fields.get(name))
    }

    /// Field `name` rendered for display.
    pub fn display_field(&self, name: &str) -> String {
        match self.field(name) {
            None => MISSING_FIELD.to_string(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Pizza name, if stored as a string.
    pub fn pizza_type(&self) -> Option<&str> {
        self.field("pizza_type").and_then(Value::as_str)
    }

    /// Total price as stored; missing or non-numeric counts as zero.
    pub fn total_price(&self) -> f64 {
        self.field("total_price")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Strict conversion, `None` if any field is missing or malformed.
    pub fn to_record(&self) -> Option<OrderRecord> {
        serde_json::from_value(self.value.clone()).ok()
    }

    /// `Order at <ts> by <name>: <qty> <pizza> (<unit>) - $<total>`
    pub fn listing_line(&self) -> String {
        format!(
            "Order at {} by {}: {} {} ({}) - ${}",
            self.display_field("orderdatetime"),
            self.display_field("customer_name"),
            self.display_field("quantity"),
            self.display_field("pizza_type"),
            self.display_field("order_type"),
            self.display_field("total_price"),
        )
    }
}
