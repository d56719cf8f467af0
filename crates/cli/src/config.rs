//! Runner configuration loaded from environment variables.

use common::Money;
use domain::{CheckoutConfig, ConfigError};
use domain::checkout::DEFAULT_SHIPPING_FEE_PER_UNIT_CENTS;

const DEFAULT_CUSTOMER_BALANCE_CENTS: i64 = 50_000;

/// How a successful checkout is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Shipment notice followed by the receipt, as plain text.
    #[default]
    Text,
    /// Shipment notices and receipt as one JSON document.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Runner configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `CHECKOUT_SHIPPING_FEE_CENTS`: flat fee per shipped unit, non-negative (default: `1000`)
/// - `CHECKOUT_CUSTOMER_BALANCE_CENTS`: demo customer balance (default: `50000`)
/// - `CHECKOUT_RELEASE_ON_FAILURE`: release cart reservations after a failure (default: `false`)
/// - `CHECKOUT_OUTPUT`: `text` or `json` (default: `text`)
///
/// The log filter comes from `RUST_LOG` and is read by the subscriber in
/// `main`, not here.
#[derive(Debug, Clone)]
pub struct Config {
    pub shipping_fee_per_unit: Money,
    pub customer_balance: Money,
    pub release_on_failure: bool,
    pub output: OutputFormat,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            shipping_fee_per_unit: parse_var(&lookup, "CHECKOUT_SHIPPING_FEE_CENTS")
                .map(Money::from_cents)
                .filter(|fee| {
                    if fee.is_negative() {
                        tracing::warn!(
                            key = "CHECKOUT_SHIPPING_FEE_CENTS",
                            value = %fee,
                            error = "must not be negative",
                            "ignoring invalid configuration value"
                        );
                    }
                    !fee.is_negative()
                })
                .unwrap_or(defaults.shipping_fee_per_unit),
            customer_balance: parse_var(&lookup, "CHECKOUT_CUSTOMER_BALANCE_CENTS")
                .map(Money::from_cents)
                .unwrap_or(defaults.customer_balance),
            release_on_failure: parse_var(&lookup, "CHECKOUT_RELEASE_ON_FAILURE")
                .unwrap_or(defaults.release_on_failure),
            output: parse_var(&lookup, "CHECKOUT_OUTPUT").unwrap_or(defaults.output),
        }
    }

    /// Returns the pricing settings for the checkout service.
    pub fn checkout_config(&self) -> Result<CheckoutConfig, ConfigError> {
        CheckoutConfig::with_shipping_fee(self.shipping_fee_per_unit)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shipping_fee_per_unit: Money::from_cents(DEFAULT_SHIPPING_FEE_PER_UNIT_CENTS),
            customer_balance: Money::from_cents(DEFAULT_CUSTOMER_BALANCE_CENTS),
            release_on_failure: false,
            output: OutputFormat::Text,
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring invalid configuration value");
            None
        }
    }
}
