use serde::{Deserialize, Serialize};

/// An amount of the single shop currency, held as whole cents.
///
/// Growing arithmetic is checked: `checked_add` and `checked_multiply`
/// return `None` instead of overflowing. Only subtraction has an operator,
/// used to settle a payment that was already checked against the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Sum of two amounts, or `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }

    /// Amount times a unit count, or `None` on overflow.
    pub fn checked_multiply(self, quantity: u32) -> Option<Money> {
        self.cents
            .checked_mul(i64::from(quantity))
            .map(Money::from_cents)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let magnitude = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", magnitude / 100, magnitude % 100)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::from_cents(self.cents - rhs.cents)
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_dollars(480).to_string(), "$480.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_checked_add() {
        let sum = Money::from_dollars(450).checked_add(Money::from_dollars(30));
        assert_eq!(sum, Some(Money::from_dollars(480)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_checked_multiply() {
        assert_eq!(
            Money::from_dollars(100).checked_multiply(2),
            Some(Money::from_dollars(200))
        );
        assert_eq!(Money::from_dollars(100).checked_multiply(0), Some(Money::zero()));
        assert_eq!(Money::from_cents(i64::MAX / 2 + 1).checked_multiply(2), None);
    }

    #[test]
    fn test_subtraction_settles_payment() {
        let mut balance = Money::from_dollars(500);
        balance -= Money::from_dollars(480);
        assert_eq!(balance, Money::from_dollars(20));
        assert!((Money::zero() - Money::from_cents(1)).is_negative());
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_dollars(10) < Money::from_dollars(480));
        assert!(Money::zero().is_zero());
    }
}
