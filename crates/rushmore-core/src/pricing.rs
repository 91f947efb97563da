//! # Pricing Engine
//!
//! Turns a unit price, a quantity and a discount rate into the payment
//! breakdown shown on the order summary and stored in the log.
//!
//! ## Stage Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal       = round(unit_price × quantity)                          │
//! │  discount       = round(subtotal × discount_rate)                       │
//! │  after_discount =       subtotal − discount        ← NOT re-rounded     │
//! │  tax            = round(after_discount × 0.075)                         │
//! │  total          = round(after_discount + tax)                           │
//! │                                                                         │
//! │  round() = nearest cent of the exact binary value, ties to even         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage runs on `f64` and is rounded with
//! [`round_to_cents`](crate::money::round_to_cents) before the next stage
//! reads it. Changing the order, rounding `after_discount`, or switching to
//! integer cents moves some totals by a cent (Classic × 3 would tax at $0.77
//! instead of $0.76).
//!
//! ## Discount Tiers (boxes only)
//! | Boxes   | Discount |
//! |---------|----------|
//! | 1 – 4   | 0%       |
//! | 5 – 9   | 10%      |
//! | 10 +    | 20%      |
//!
//! Slices are never discounted, whatever the quantity.

use crate::error::ValidationError;
use crate::money::{round_to_cents, Money};
use crate::types::OrderUnit;
use crate::validation::ValidationResult;
use crate::{
    SALES_TAX_RATE, SLICES_PER_PIE, TEN_PERCENT_TIER_QUANTITY, TWENTY_PERCENT_TIER_QUANTITY,
};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate in basis points, always below 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DiscountRate(u32);

impl DiscountRate {
    pub const NONE: DiscountRate = DiscountRate(0);
    pub const TEN_PERCENT: DiscountRate = DiscountRate(1_000);
    pub const TWENTY_PERCENT: DiscountRate = DiscountRate(2_000);

    /// Creates a discount rate from basis points (0 ≤ bps < 10000).
    pub fn from_bps(bps: u32) -> ValidationResult<Self> {
        if bps >= 10_000 {
            return Err(ValidationError::OutOfRange {
                field: "discount rate".to_string(),
                min: 0,
                max: 9_999,
            });
        }
        Ok(DiscountRate(bps))
    }

    /// Volume discount for a box order.
    ///
    /// Thresholds are inclusive: 5 boxes already get 10%, 10 boxes 20%.
    pub const fn for_box_quantity(quantity: u32) -> Self {
        if quantity >= TWENTY_PERCENT_TIER_QUANTITY {
            DiscountRate::TWENTY_PERCENT
        } else if quantity >= TEN_PERCENT_TIER_QUANTITY {
            DiscountRate::TEN_PERCENT
        } else {
            DiscountRate::NONE
        }
    }

    /// Discount policy for any order: tiered for boxes, zero for slices.
    pub const fn for_order(unit: OrderUnit, quantity: u32) -> Self {
        match unit {
            OrderUnit::Box => DiscountRate::for_box_quantity(quantity),
            OrderUnit::Slice => DiscountRate::NONE,
        }
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Bit-identical to the literals `0.1` and `0.2` for the two tiers.
    #[inline]
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 10_000.0
    }

    /// Whole percent for display ("10%").
    #[inline]
    pub const fn whole_percent(&self) -> u32 {
        self.0 / 100
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Payment Breakdown
// =============================================================================

/// Result of pricing one order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentBreakdown {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
    /// Rate that produced `discount`.
    pub discount_rate: DiscountRate,
}

impl PaymentBreakdown {
    /// True iff a nonzero discount rate was used.
    pub fn discount_applied(&self) -> bool {
        !self.discount_rate.is_zero()
    }

    /// Subtotal minus discount, as displayed.
    pub fn after_discount(&self) -> Money {
        self.subtotal - self.discount
    }
}

/// Prices `quantity` units at `unit_price` with the given discount.
///
/// Total over its domain: the quantity and rate types already exclude zero
/// quantities and rates of 100% or more.
///
/// ## Example
/// ```rust
/// use rushmore_core::money::Money;
/// use rushmore_core::pricing::{compute_payment, DiscountRate};
///
/// let deluxe = Money::from_cents(600);
/// let payment = compute_payment(deluxe, 10, DiscountRate::TWENTY_PERCENT);
///
/// assert_eq!(payment.subtotal.cents(), 6000);
/// assert_eq!(payment.discount.cents(), 1200);
/// assert_eq!(payment.tax.cents(), 360);
/// assert_eq!(payment.total.cents(), 5160);
/// ```
pub fn compute_payment(
    unit_price: Money,
    quantity: u32,
    discount_rate: DiscountRate,
) -> PaymentBreakdown {
    let subtotal = round_stage(unit_price.as_amount() * f64::from(quantity));
    let discount = round_stage(subtotal * discount_rate.fraction());
    let after_discount = subtotal - discount;
    let tax = round_stage(after_discount * SALES_TAX_RATE.fraction());
    let total = round_stage(after_discount + tax);

    PaymentBreakdown {
        subtotal: Money::from_amount(subtotal),
        discount: Money::from_amount(discount),
        tax: Money::from_amount(tax),
        total: Money::from_amount(total),
        discount_rate,
    }
}

/// Prices an order using the standard discount policy for its unit.
pub fn price_order(unit_price: Money, unit: OrderUnit, quantity: u32) -> PaymentBreakdown {
    compute_payment(unit_price, quantity, DiscountRate::for_order(unit, quantity))
}

/// Price of one slice: `round(pie_price / 8)`.
pub fn slice_price(pie_price: Money) -> Money {
    Money::from_cents(round_to_cents(pie_price.as_amount() / SLICES_PER_PIE as f64))
}

/// Rounds to the cent and hands back the binary value the next stage reads.
#[inline]
fn round_stage(amount: f64) -> f64 {
    round_to_cents(amount) as f64 / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================
