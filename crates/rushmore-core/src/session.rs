//! # Order Session
//!
//! State machine for taking one order, from the name prompt to the moment
//! the record is safely in the log.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Session Lifecycle                           │
//! │                                                                         │
//! │   Idle ──name──► NameEntered ──B/S──► UnitChosen ──qty──► QuantityChosen│
//! │    │                 │  ▲                │  ▲                 │        │
//! │    │ empty name      │  └─ retry         │  └─ retry          │ price  │
//! │    │                 │ Q                 │ q                  ▼        │
//! │    ▼                 ▼                   ▼                  Priced     │
//! │  ┌──────────────────────────────────────────┐                 │        │
//! │  │               Cancelled                  │◄── cancel() ────┤ (not   │
//! │  │  no price computed, nothing written      │   before price  │  from  │
//! │  └──────────────────────────────────────────┘                 │ Priced)│
//! │                                                               ▼        │
//! │                                                           Persisted    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid unit or quantity input is a `Step::Retry`: the session stays where
//! it is and the caller asks again. The session never touches the store
//! itself; the caller appends [`OrderSession::record`] and then reports back
//! with [`OrderSession::mark_persisted`].

use chrono::NaiveDateTime;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::{price_order, PaymentBreakdown};
use crate::types::{MenuItem, OrderRecord, OrderUnit};
use crate::validation::{
    normalize_customer_name, parse_quantity, parse_unit_choice, QuantityInput, UnitChoice,
};

// =============================================================================
// States
// =============================================================================

/// Where an order session currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    NameEntered {
        customer: String,
    },
    UnitChosen {
        customer: String,
        unit: OrderUnit,
    },
    QuantityChosen {
        customer: String,
        unit: OrderUnit,
        quantity: u32,
    },
    Priced(PricedOrder),
    Persisted(OrderRecord),
    Cancelled(CancelReason),
}

impl SessionState {
    /// Short lowercase name, used in error messages and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::NameEntered { .. } => "name entered",
            SessionState::UnitChosen { .. } => "unit chosen",
            SessionState::QuantityChosen { .. } => "quantity chosen",
            SessionState::Priced(_) => "priced",
            SessionState::Persisted(_) => "persisted",
            SessionState::Cancelled(_) => "cancelled",
        }
    }
}

/// Why a session ended without an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Name was empty after trimming.
    InvalidName,
    /// `Q` at the box/slice prompt.
    AtUnitPrompt,
    /// `q` at the quantity prompt.
    AtQuantityPrompt,
    /// Input ended (EOF) or the caller cancelled explicitly.
    Aborted,
}

/// Outcome of feeding one answer to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Input accepted, the session moved to the next state.
    Advanced,
    /// Input rejected; ask the same question again.
    Retry(ValidationError),
    /// The session is now cancelled.
    Cancelled(CancelReason),
}

/// A fully priced order waiting to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub customer_name: String,
    pub pizza_name: String,
    pub unit: OrderUnit,
    pub quantity: u32,
    pub unit_price: Money,
    pub payment: PaymentBreakdown,
}

impl PricedOrder {
    /// Builds the log record, stamped with `created_at`.
    pub fn to_record(&self, created_at: NaiveDateTime) -> OrderRecord {
        OrderRecord {
            orderdatetime: created_at,
            customer_name: self.customer_name.clone(),
            pizza_type: self.pizza_name.clone(),
            order_type: self.unit,
            quantity: self.quantity,
            total_price: self.payment.total,
            tax: self.payment.tax,
            discount_applied: self.payment.discount_applied(),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// One order for one menu item.
#[derive(Debug, Clone)]
pub struct OrderSession {
    item: MenuItem,
    state: SessionState,
}

impl OrderSession {
    /// Starts a session for `item` in the `Idle` state.
    pub fn new(item: &MenuItem) -> Self {
        OrderSession {
            item: item.clone(),
            state: SessionState::Idle,
        }
    }

    /// The unit picked at the box/slice prompt. Requires UnitChosen or QuantityChosen.
    pub fn chosen_unit(&self) -> CoreResult<OrderUnit> {
        match &self.state {
            SessionState::UnitChosen { unit, .. } | SessionState::QuantityChosen { unit, .. } => {
                Ok(*unit)
            }
            _ => Err(self.unexpected("unit chosen")),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Idle → NameEntered, or Cancelled when the name is empty.
    pub fn submit_name(&mut self, raw: &str) -> CoreResult<Step> {
        if !matches!(self.state, SessionState::Idle) {
            return Err(self.unexpected("idle"));
        }

        match normalize_customer_name(raw) {
            Ok(customer) => {
                self.state = SessionState::NameEntered { customer };
                Ok(Step::Advanced)
            }
            Err(_) => Ok(self.cancel_with(CancelReason::InvalidName)),
        }
    }

    /// NameEntered → UnitChosen, Cancelled on `Q`, Retry otherwise.
    pub fn submit_unit(&mut self, raw: &str) -> CoreResult<Step> {
        let customer = match &self.state {
            SessionState::NameEntered { customer } => customer.clone(),
            _ => return Err(self.unexpected("name entered")),
        };

        match parse_unit_choice(raw) {
            Ok(UnitChoice::Unit(unit)) => {
                self.state = SessionState::UnitChosen { customer, unit };
                Ok(Step::Advanced)
            }
            Ok(UnitChoice::Cancel) => Ok(self.cancel_with(CancelReason::AtUnitPrompt)),
            Err(err) => Ok(Step::Retry(err)),
        }
    }

    /// UnitChosen → QuantityChosen, Cancelled on `q`, Retry otherwise.
    pub fn submit_quantity(&mut self, raw: &str) -> CoreResult<Step> {
        let (customer, unit) = match &self.state {
            SessionState::UnitChosen { customer, unit } => (customer.clone(), *unit),
            _ => return Err(self.unexpected("unit chosen")),
        };

        match parse_quantity(raw) {
            Ok(QuantityInput::Quantity(quantity)) => {
                self.state = SessionState::QuantityChosen {
                    customer,
                    unit,
                    quantity,
                };
                Ok(Step::Advanced)
            }
            Ok(QuantityInput::Cancel) => Ok(self.cancel_with(CancelReason::AtQuantityPrompt)),
            Err(err) => Ok(Step::Retry(err)),
        }
    }

    /// QuantityChosen → Priced.
    pub fn price(&mut self) -> CoreResult<PricedOrder> {
        let (customer, unit, quantity) = match &self.state {
            SessionState::QuantityChosen {
                customer,
                unit,
                quantity,
            } => (customer.clone(), *unit, *quantity),
            _ => return Err(self.unexpected("quantity chosen")),
        };

        let unit_price = self.item.unit_price(unit);
        let priced = PricedOrder {
            customer_name: customer,
            pizza_name: self.item.name.clone(),
            unit,
            quantity,
            unit_price,
            payment: price_order(unit_price, unit, quantity),
        };

        self.state = SessionState::Priced(priced.clone());
        Ok(priced)
    }

    /// The record to append, stamped with `created_at`. Requires Priced.
    pub fn record(&self, created_at: NaiveDateTime) -> CoreResult<OrderRecord> {
        match &self.state {
            SessionState::Priced(priced) => Ok(priced.to_record(created_at)),
            _ => Err(self.unexpected("priced")),
        }
    }

    /// Priced → Persisted, once the caller has written `record`.
    pub fn mark_persisted(&mut self, record: OrderRecord) -> CoreResult<()> {
        if !matches!(self.state, SessionState::Priced(_)) {
            return Err(self.unexpected("priced"));
        }
        self.state = SessionState::Persisted(record);
        Ok(())
    }

    /// Cancels from any state before pricing.
    pub fn cancel(&mut self) -> CoreResult<()> {
        match self.state {
            SessionState::Idle
            | SessionState::NameEntered { .. }
            | SessionState::UnitChosen { .. }
            | SessionState::QuantityChosen { .. } => {
                self.cancel_with(CancelReason::Aborted);
                Ok(())
            }
            _ => Err(self.unexpected("not yet priced")),
        }
    }

    fn cancel_with(&mut self, reason: CancelReason) -> Step {
        self.state = SessionState::Cancelled(reason);
        Step::Cancelled(reason)
    }

    fn unexpected(&self, expected: &'static str) -> CoreError {
        CoreError::InvalidSessionState {
            expected,
            actual: self.state.name(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
