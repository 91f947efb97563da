//! # Validation Module
//!
//! Input validation for everything the cashier types during an order.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt                                               │
//! │  └── Reads one line, hands the raw text to the session                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trims and title-cases the customer name                           │
//! │  ├── Recognises B / S / Q and the cancel token                         │
//! │  └── Accepts only positive whole numbers as quantities                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Types                                                        │
//! │  └── u32 quantity and DiscountRate keep bad input out of pricing       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal: every error becomes a re-prompt or an abandoned
//! order in the console.

use crate::error::ValidationError;
use crate::types::OrderUnit;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Token that cancels the order at the unit or quantity prompt.
pub const CANCEL_TOKEN: &str = "q";

// =============================================================================
// Customer Name
// =============================================================================

/// Trims and title-cases a customer name.
///
/// ## Rules
/// - Surrounding whitespace is removed
/// - Must not be empty after trimming
/// - Every run of letters starts upper-case, the rest is lower-case
///
/// ## Example
/// ```rust
/// use rushmore_core::validation::normalize_customer_name;
///
/// assert_eq!(normalize_customer_name("  mary-jane o'neil ").unwrap(), "Mary-Jane O'Neil");
/// assert!(normalize_customer_name("   ").is_err());
/// ```
pub fn normalize_customer_name(raw: &str) -> ValidationResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(title_case(name))
}

/// Title-cases every run of cased letters: the first letter takes its
/// titlecase form and the rest are lower-cased. Anything without case
/// (space, hyphen, apostrophe, digit, CJK) ends the run.
///
/// The titlecase form is the first char of the upper-case mapping followed by
/// the lower-cased remainder, so `ß` becomes `Ss`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_cased = false;

    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && previous_is_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            let mut upper = c.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
        } else {
            out.push(c);
        }
        previous_is_cased = cased;
    }

    out
}

// =============================================================================
// Unit Choice
// =============================================================================

/// What the cashier picked at the box/slice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitChoice {
    Unit(OrderUnit),
    Cancel,
}

/// Parses the box/slice prompt answer (`B`, `S` or `Q`, any case).
///
/// ## Example
/// ```rust
/// use rushmore_core::types::OrderUnit;
/// use rushmore_core::validation::{parse_unit_choice, UnitChoice};
///
/// assert_eq!(parse_unit_choice(" b ").unwrap(), UnitChoice::Unit(OrderUnit::Box));
/// assert_eq!(parse_unit_choice("Q").unwrap(), UnitChoice::Cancel);
/// assert!(parse_unit_choice("x").is_err());
/// ```
pub fn parse_unit_choice(raw: &str) -> ValidationResult<UnitChoice> {
    match raw.trim().to_uppercase().as_str() {
        "B" => Ok(UnitChoice::Unit(OrderUnit::Box)),
        "S" => Ok(UnitChoice::Unit(OrderUnit::Slice)),
        "Q" => Ok(UnitChoice::Cancel),
        _ => Err(ValidationError::NotAllowed {
            field: "choice".to_string(),
            allowed: vec!["B".to_string(), "S".to_string(), "Q".to_string()],
        }),
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// What the cashier typed at the quantity prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityInput {
    Quantity(u32),
    Cancel,
}

/// Parses the quantity prompt answer.
///
/// ## Rules
/// - `q` (any case) cancels
/// - Only ASCII digits are accepted: no sign, no decimal point, no spaces
///   inside the number
/// - Zero is rejected with [`ValidationError::MustBePositive`]
/// - Numbers too large for `u32` are [`ValidationError::OutOfRange`]
/// - Anything else is [`ValidationError::InvalidFormat`]
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  How many boxes do you want? (or type 'q' to cancel):                  │
/// │       │                                                                 │
/// │       ├── "q"   → Cancel                                                │
/// │       ├── "0"   → "Quantity must be greater than 0." → ask again        │
/// │       ├── "-2"  → "Please enter a valid positive number." → ask again   │
/// │       ├── "2.5" → "Please enter a valid positive number." → ask again   │
/// │       └── "12"  → Quantity(12)                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(raw: &str) -> ValidationResult<QuantityInput> {
    let token = raw.trim();

    if token.eq_ignore_ascii_case(CANCEL_TOKEN) {
        return Ok(QuantityInput::Cancel);
    }

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        });
    }

    let quantity: u32 = token.parse().map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })?;

    validate_quantity(quantity)?;
    Ok(QuantityInput::Quantity(quantity))
}

/// Validates an already-numeric quantity.
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_customer_name() {
        assert_eq!(normalize_customer_name("ada").unwrap(), "Ada");
        assert_eq!(normalize_customer_name("  ADA LOVELACE\t").unwrap(), "Ada Lovelace");
        assert_eq!(normalize_customer_name("jean-luc").unwrap(), "Jean-Luc");
        assert_eq!(normalize_customer_name("r2d2").unwrap(), "R2D2");
        assert_eq!(normalize_customer_name("élodie").unwrap(), "Élodie");

        assert!(matches!(
            normalize_customer_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(normalize_customer_name(" \n ").is_err());
    }

    #[test]
    fn test_title_case_runs_of_cased_letters() {
        assert_eq!(title_case("ßa"), "Ssa");
        assert_eq!(title_case("straße"), "Straße");
        assert_eq!(title_case("李ana"), "李Ana");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("jos\u{FFFD}"), "Jos\u{FFFD}");
    }

    #[test]
    fn test_parse_unit_choice() {
        assert_eq!(parse_unit_choice("B").unwrap(), UnitChoice::Unit(OrderUnit::Box));
        assert_eq!(parse_unit_choice("s").unwrap(), UnitChoice::Unit(OrderUnit::Slice));
        assert_eq!(parse_unit_choice("q").unwrap(), UnitChoice::Cancel);

        assert!(parse_unit_choice("").is_err());
        assert!(parse_unit_choice("box").is_err());
        assert!(parse_unit_choice("1").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), QuantityInput::Quantity(1));
        assert_eq!(parse_quantity(" 12 ").unwrap(), QuantityInput::Quantity(12));
        assert_eq!(parse_quantity("007").unwrap(), QuantityInput::Quantity(7));
        assert_eq!(parse_quantity("Q").unwrap(), QuantityInput::Cancel);
    }

    #[test]
    fn test_parse_quantity_rejects() {
        assert!(matches!(
            parse_quantity("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        for bad in ["", "-3", "+3", "2.5", "ten", "1 2", "quit"] {
            assert!(
                matches!(parse_quantity(bad), Err(ValidationError::InvalidFormat { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!(matches!(
            parse_quantity("99999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
