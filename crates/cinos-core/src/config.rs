//! # Order Configuration
//!
//! Settings an order reads once, at creation.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CINOS_*`)
//! 2. Defaults (this file)
//!
//! Menu allow-lists and prices are compiled in and are not configurable.
//!
//! ## Environment Variables
//! - `CINOS_TAX_RATE`: sales tax as a percentage, e.g. `"7.25"`

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreResult, ValidationError};
use crate::types::TaxRate;
use crate::validation::validate_tax_rate_bps;
use crate::TAX_RATE_ENV;

/// Configuration applied to new orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfig {
    /// Sales tax applied to the order subtotal.
    pub tax_rate: TaxRate,
}

impl Default for OrderConfig {
    /// 7.25% sales tax.
    fn default() -> Self {
        OrderConfig {
            tax_rate: TaxRate::default(),
        }
    }
}

impl OrderConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Errors
    /// `Validation` if `CINOS_TAX_RATE` is set but is not a percentage
    /// between 0 and 100.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key/value source.
    ///
    /// ## Usage
    /// ```rust
    /// use cinos_core::config::OrderConfig;
    ///
    /// let config = OrderConfig::from_lookup(|key| match key {
    ///     "CINOS_TAX_RATE" => Some("8.25".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.tax_rate.bps(), 825);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = OrderConfig::default();

        if let Some(raw) = lookup(TAX_RATE_ENV) {
            config.tax_rate = parse_tax_rate(&raw)?;
            debug!(tax_rate = %config.tax_rate, "tax rate overridden from environment");
        }

        Ok(config)
    }
}

/// Float noise allowed when checking that a percentage lands on a basis point.
const BPS_TOLERANCE: f64 = 1e-6;

/// Parses a percentage string (`"7.25"`) into a tax rate.
pub fn parse_tax_rate(raw: &str) -> CoreResult<TaxRate> {
    let pct: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: TAX_RATE_ENV.to_string(),
            reason: format!("'{}' is not a percentage", raw),
        })?;

    if !pct.is_finite() || pct < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        }
        .into());
    }

    let bps = pct * 100.0;
    if (bps - bps.round()).abs() > BPS_TOLERANCE {
        return Err(ValidationError::InvalidFormat {
            field: TAX_RATE_ENV.to_string(),
            reason: format!("'{}' is finer than one basis point (0.01%)", raw.trim()),
        }
        .into());
    }

    let rate = TaxRate::from_percentage(pct);
    validate_tax_rate_bps(rate.bps())?;
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn lookup_tax(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key| (key == TAX_RATE_ENV).then(|| value.to_string())
    }

    #[test]
    fn test_default_config() {
        let config = OrderConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, OrderConfig::default());
        assert_eq!(config.tax_rate.bps(), 725);
    }

    #[test]
    fn test_tax_rate_override() {
        let config = OrderConfig::from_lookup(lookup_tax(" 8.25 ")).unwrap();
        assert_eq!(config.tax_rate.bps(), 825);

        let config = OrderConfig::from_lookup(lookup_tax("0")).unwrap();
        assert_eq!(config.tax_rate.bps(), 0);
    }

    #[test]
    fn test_tax_rate_not_a_number() {
        let err = OrderConfig::from_lookup(lookup_tax("seven")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_tax_rate_out_of_range() {
        for raw in ["-1", "100.01", "NaN", "inf"] {
            let err = parse_tax_rate(raw).unwrap_err();
            assert!(
                matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })),
                "{raw} should be out of range"
            );
        }
        assert_eq!(parse_tax_rate("100").unwrap().bps(), 10000);
    }

    #[test]
    fn test_tax_rate_finer_than_a_basis_point() {
        for raw in ["0.004", "7.255", "8.2501"] {
            let err = parse_tax_rate(raw).unwrap_err();
            assert!(
                matches!(err, CoreError::Validation(ValidationError::InvalidFormat { .. })),
                "{raw} should be rejected"
            );
        }
        assert_eq!(parse_tax_rate("0.07").unwrap().bps(), 7);
        assert_eq!(parse_tax_rate("7.25").unwrap().bps(), 725);
    }
}
