//! # Validation Module
//!
//! Input validation for menu labels and configuration values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Input Is Checked                             │
//! │                                                                         │
//! │  Caller text ("Sprite ")                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  match_label ← THIS MODULE                                             │
//! │  ├── trim surrounding whitespace                                       │
//! │  ├── compare case-insensitively against the allow-list                 │
//! │  └── return the canonical option (DrinkBase::Sprite)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Item stores an enum: off-menu values are unrepresentable              │
//! │                                                                         │
//! │  Reads never re-validate. Validation happens at write time only.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Case Policy
//! Every item type uses the same rule: `"SPRITE"`, `" sprite"` and
//! `"sprite"` all select the `sprite` base, and the menu spelling is what
//! gets stored and printed. Matching is ASCII case-insensitive.
//!
//! ## Usage
//! ```rust
//! use cinos_core::menu::DrinkBase;
//! use cinos_core::validation::match_label;
//!
//! let base: DrinkBase = match_label("mr. salt").unwrap();
//! assert_eq!(base, DrinkBase::MrSalt);
//! assert!(match_label::<DrinkBase>("cola").is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::menu::MenuOption;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Menu Labels
// =============================================================================

/// Resolves user text to an option on the `T` allow-list.
///
/// ## Errors
/// `CoreError::InvalidValue` naming the field, the rejected text, and the
/// canonical labels the caller can choose from.
pub fn match_label<T: MenuOption>(input: &str) -> CoreResult<T> {
    let wanted = input.trim();

    T::ALL
        .iter()
        .copied()
        .find(|option| option.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CoreError::invalid_value(T::FIELD, input, &T::labels()))
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
