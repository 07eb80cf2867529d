//! # Error Types
//!
//! Domain-specific error types for cinos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError                                                             │
//! │  ├── InvalidValue      - label not on the menu allow-list              │
//! │  ├── InvalidInputType  - bulk input of the wrong shape (JSON boundary) │
//! │  ├── InvalidType       - something that is not a menu item             │
//! │  ├── IndexOutOfRange   - remove_item outside [0, len)                  │
//! │  ├── Snapshot          - malformed snapshot JSON                       │
//! │  └── Validation        - wraps ValidationError (configuration)         │
//! │                                                                         │
//! │  Flow: caller input ──► CoreError ──► caller (never retried/logged)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value, index)
//! 3. Errors are enum variants, never String
//! 4. A failed call never leaves an item or order half-updated

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by menu items and orders.
///
/// Every variant is a caller-input error: none of them are transient, so
/// nothing in this crate retries or swallows them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A category or modifier label is not on the menu.
    ///
    /// ## When This Occurs
    /// - `Drink::set_base("cola")`
    /// - `Food::add_topping("salsa")`
    /// - `IceStorm::set_flavor("Strawberry")`
    #[error("Invalid {field}: {value}. Choose from {allowed:?}")]
    InvalidValue {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// A bulk-set input did not have the expected shape.
    ///
    /// Only reachable through the JSON boundary; typed callers get this
    /// guarantee from the compiler.
    #[error("{field} must be {expected}")]
    InvalidInputType {
        field: &'static str,
        expected: &'static str,
    },

    /// Something other than a menu item was offered to an order.
    #[error("Item must be a drink, food or ice storm, got {found}")]
    InvalidType { found: String },

    /// `remove_item` was called with an index outside the order.
    #[error("Invalid index {index}: order has {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// An order snapshot could not be decoded.
    #[error("Invalid order snapshot: {0}")]
    Snapshot(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Builds an `InvalidValue` error for a menu field.
    pub(crate) fn invalid_value(
        field: &'static str,
        value: &str,
        allowed: &[&'static str],
    ) -> Self {
        CoreError::InvalidValue {
            field,
            value: value.to_string(),
            allowed: allowed.to_vec(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a tax rate that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::invalid_value("base", "cola", &["water", "sprite"]);
        assert_eq!(
            err.to_string(),
            "Invalid base: cola. Choose from [\"water\", \"sprite\"]"
        );

        let err = CoreError::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(err.to_string(), "Invalid index 3: order has 1 items");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "tax_rate must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::InvalidFormat {
            field: "CINOS_TAX_RATE".to_string(),
            reason: "not a number".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
