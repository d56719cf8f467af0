use common::Money;
use serde::Serialize;

use crate::error::ConfigError;

/// Flat fee charged per shipped unit unless configured otherwise.
pub const DEFAULT_SHIPPING_FEE_PER_UNIT_CENTS: i64 = 1_000;

/// Pricing settings for the checkout routine.
///
/// The shipping fee is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutConfig {
    shipping_fee_per_unit: Money,
}

impl CheckoutConfig {
    pub fn with_shipping_fee(shipping_fee_per_unit: Money) -> Result<Self, ConfigError> {
        if shipping_fee_per_unit.is_negative() {
            return Err(ConfigError::NegativeShippingFee {
                fee: shipping_fee_per_unit,
            });
        }

        Ok(Self {
            shipping_fee_per_unit,
        })
    }

    /// Charged once for every individual unit that requires shipping.
    pub fn shipping_fee_per_unit(&self) -> Money {
        self.shipping_fee_per_unit
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_fee_per_unit: Money::from_cents(DEFAULT_SHIPPING_FEE_PER_UNIT_CENTS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fee_is_ten() {
        assert_eq!(
            CheckoutConfig::default().shipping_fee_per_unit(),
            Money::from_dollars(10)
        );
    }

    #[test]
    fn test_zero_fee_is_allowed() {
        let config = CheckoutConfig::with_shipping_fee(Money::zero()).unwrap();
        assert!(config.shipping_fee_per_unit().is_zero());
    }

    #[test]
    fn test_negative_fee_is_rejected() {
        let err = CheckoutConfig::with_shipping_fee(Money::from_cents(-1)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NegativeShippingFee {
                fee: Money::from_cents(-1)
            }
        );
    }
}
