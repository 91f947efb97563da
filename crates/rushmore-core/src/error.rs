//! # Error Types
//!
//! Domain-specific error types for rushmore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rushmore-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog and session state errors               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rushmore-store errors (separate crate)                                │
//! │  └── StoreError       - Order file failures                            │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── AppError         - What the console reports                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → message on screen      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation errors never end the program: the console re-prompts or
//! abandons the current order and returns to the menu.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu key is not in the catalog.
    #[error("We do not have this type of pizza for now: {0}")]
    PizzaNotFound(String),

    /// A session operation was called in the wrong state.
    ///
    /// ## When This Occurs
    /// - Pricing before a quantity was accepted
    /// - Building a record from a cancelled session
    /// - Feeding input to a session that already finished
    #[error("Order session is {actual}, expected {expected}")]
    InvalidSessionState {
        expected: &'static str,
        actual: &'static str,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when typed input doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., letters where a number was expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
