//! Paying customer.

use common::{CustomerId, Money};
use serde::{Deserialize, Serialize};

/// A customer with a spendable balance.
///
/// The balance is only decreased by a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    balance: Money,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            balance,
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn can_afford(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    pub(crate) fn deduct(&mut self, amount: Money) {
        self.balance -= amount;
    }
}
