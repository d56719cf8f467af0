//! Fixed demo scenario: four products, one customer, three cart adds.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use common::{Money, Weight};
use domain::{CatalogError, Customer, Product};

/// Products, a customer and the cart adds to perform, in order.
#[derive(Debug)]
pub struct Scenario {
    pub products: Vec<Arc<Product>>,
    pub customer: Customer,
    pub adds: Vec<(Arc<Product>, u32)>,
    /// Instant at which expiry is evaluated during checkout.
    pub now: DateTime<Utc>,
}

impl Scenario {
    /// The demo shop as of `now`.
    ///
    /// Cheese and biscuits expire one day after `now`. The customer, Alice,
    /// starts with `balance` and buys 2 cheese, 1 biscuits and 1 scratch card.
    pub fn demo(now: DateTime<Utc>, balance: Money) -> Result<Self, CatalogError> {
        let tomorrow = now + Duration::days(1);

        let cheese = Arc::new(
            Product::new("Cheese", Money::from_dollars(100), 5)?
                .with_expiry(tomorrow)
                .with_weight(Weight::from_kilograms(0.2)),
        );
        let biscuits = Arc::new(
            Product::new("Biscuits", Money::from_dollars(150), 2)?
                .with_expiry(tomorrow)
                .with_weight(Weight::from_kilograms(0.7)),
        );
        let tv = Arc::new(
            Product::new("TV", Money::from_dollars(300), 3)?
                .with_weight(Weight::from_kilograms(5.0)),
        );
        let scratch_card = Arc::new(Product::new(
            "Mobile Scratch Card",
            Money::from_dollars(50),
            10,
        )?);

        Ok(Self {
            adds: vec![
                (Arc::clone(&cheese), 2),
                (Arc::clone(&biscuits), 1),
                (Arc::clone(&scratch_card), 1),
            ],
            products: vec![cheese, biscuits, tv, scratch_card],
            customer: Customer::new("Alice", balance),
            now,
        })
    }

    /// Looks up a product by name.
    pub fn product(&self, name: &str) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.name() == name)
    }
}
