//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to the storefront defaults:
//!
//! - `LUXE_FREE_SHIPPING_THRESHOLD` - Subtotal at or above which shipping
//!   is free (default: 4000)
//! - `LUXE_SHIPPING_FEE` - Flat shipping fee below the threshold
//!   (default: 100)
//! - `LUXE_TAX_RATE` - Tax rate applied to the subtotal (default: 0.18)
//! - `LUXE_STATE_DIR` - Directory for persisted UI state
//!   (default: `.luxe-state`)

use std::path::PathBuf;

use rust_decimal::{dec, Decimal};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Subtotal at or above which the shipping fee is waived.
    pub free_shipping_threshold: Decimal,
    /// Flat shipping fee charged below the threshold.
    pub shipping_fee: Decimal,
    /// Tax rate applied to the subtotal (e.g., 0.18 for 18%).
    pub tax_rate: Decimal,
    /// Directory holding the persisted key-value state.
    pub state_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: dec!(4000),
            shipping_fee: dec!(100),
            tax_rate: dec!(0.18),
            state_dir: PathBuf::from(".luxe-state"),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Unset variables fall back to [`StoreConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse or carries a
    /// nonsensical value (negative fee, tax rate outside `[0, 1]`).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let free_shipping_threshold = get_decimal_or(
            "LUXE_FREE_SHIPPING_THRESHOLD",
            defaults.free_shipping_threshold,
        )?;
        let shipping_fee = get_decimal_or("LUXE_SHIPPING_FEE", defaults.shipping_fee)?;
        let tax_rate = get_decimal_or("LUXE_TAX_RATE", defaults.tax_rate)?;
        let state_dir = std::env::var("LUXE_STATE_DIR")
            .map_or(defaults.state_dir, PathBuf::from);

        let config = Self {
            free_shipping_threshold,
            shipping_fee,
            tax_rate,
            state_dir,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.free_shipping_threshold < Decimal::ZERO {
            return Err(ConfigError::InvalidValue(
                "LUXE_FREE_SHIPPING_THRESHOLD".to_owned(),
                "must not be negative".to_owned(),
            ));
        }
        if self.shipping_fee < Decimal::ZERO {
            return Err(ConfigError::InvalidValue(
                "LUXE_SHIPPING_FEE".to_owned(),
                "must not be negative".to_owned(),
            ));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(ConfigError::InvalidValue(
                "LUXE_TAX_RATE".to_owned(),
                "must be between 0 and 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Get an optional decimal environment variable with a default.
fn get_decimal_or(key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<Decimal>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.free_shipping_threshold, dec!(4000));
        assert_eq!(config.shipping_fee, dec!(100));
        assert_eq!(config.tax_rate, dec!(0.18));
        assert_eq!(config.state_dir, PathBuf::from(".luxe-state"));
    }

    #[test]
    fn test_validate_rejects_negative_fee() {
        let config = StoreConfig {
            shipping_fee: dec!(-1),
            ..StoreConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_, _))
        ));
    }

    #[test]
    fn test_validate_rejects_tax_rate_above_one() {
        let config = StoreConfig {
            tax_rate: dec!(1.5),
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(StoreConfig::default().validate().is_ok());
    }
}
