//! Catalog product with optional expiry and shipping capabilities.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use common::{Money, Weight};

use super::{ProductVariant, ShipmentUnit};
use crate::error::CatalogError;

/// A catalog entry.
///
/// Name and price are fixed. Available quantity is tracked with an atomic
/// counter so a product can be shared through `Arc` by the catalog and any
/// number of carts while still being reserved in place.
///
/// Expiry and shipping are attached independently at construction time:
///
/// ```
/// use chrono::{Duration, Utc};
/// use common::{Money, Weight};
/// use domain::{Product, ProductVariant};
///
/// let cheese = Product::new("Cheese", Money::from_dollars(100), 5)
///     .unwrap()
///     .with_expiry(Utc::now() + Duration::days(1))
///     .with_weight(Weight::from_grams(200));
/// assert_eq!(cheese.variant(), ProductVariant::ExpirableShippable);
/// ```
#[derive(Debug)]
pub struct Product {
    name: String,
    price: Money,
    quantity: AtomicU32,
    expires_at: Option<DateTime<Utc>>,
    weight: Option<Weight>,
}

impl Product {
    /// Creates a base product with no expiry and no shipping requirement.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Result<Self, CatalogError> {
        if price.is_negative() {
            return Err(CatalogError::InvalidPrice { price });
        }

        Ok(Self {
            name: name.into(),
            price,
            quantity: AtomicU32::new(quantity),
            expires_at: None,
            weight: None,
        })
    }

    /// Attaches the expiry capability.
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Attaches the shipping capability.
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn available_quantity(&self) -> u32 {
        self.quantity.load(Ordering::Acquire)
    }

    pub fn variant(&self) -> ProductVariant {
        ProductVariant::from_capabilities(self.expires_at.is_some(), self.weight.is_some())
    }

    /// Returns true if the product has expired as of now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true if `now` is strictly after the expiry instant.
    ///
    /// Products without the expiry capability never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }

    pub fn requires_shipping(&self) -> bool {
        self.weight.is_some()
    }

    /// Weight of one unit, if the product is shippable.
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    /// Returns the shipping view of one unit, if the product is shippable.
    pub fn shipment_unit(&self) -> Option<ShipmentUnit> {
        self.weight
            .map(|weight| ShipmentUnit::new(self.name.clone(), weight))
    }

    /// Decreases the available quantity.
    ///
    /// Sufficiency is the caller's responsibility; the counter saturates at
    /// zero instead of wrapping.
    pub fn reserve(&self, quantity: u32) {
        self.update_quantity(|available| Some(available.saturating_sub(quantity)));
    }

    /// Returns previously reserved units to stock.
    pub fn restock(&self, quantity: u32) {
        self.update_quantity(|available| Some(available.saturating_add(quantity)));
    }

    /// Reserves `quantity` only if that much is available.
    ///
    /// Returns the available quantity observed at the time of refusal.
    pub(crate) fn try_reserve(&self, quantity: u32) -> Result<(), u32> {
        self.quantity
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |available| {
                available.checked_sub(quantity)
            })
            .map(|_| ())
    }

    fn update_quantity(&self, f: impl FnMut(u32) -> Option<u32>) {
        // `f` always yields a value, so the update cannot be refused.
        let _ = self
            .quantity
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, f);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn scratch_card() -> Product {
        Product::new("Mobile Scratch Card", Money::from_dollars(50), 10).unwrap()
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = Product::new("Broken", Money::from_cents(-1), 1);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::InvalidPrice {
                price: Money::from_cents(-1)
            }
        );
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let product = Product::new("Sample", Money::zero(), 1).unwrap();
        assert!(product.price().is_zero());
    }

    #[test]
    fn test_base_product_capabilities() {
        let product = scratch_card();
        assert_eq!(product.variant(), ProductVariant::Base);
        assert!(!product.is_expired());
        assert!(!product.requires_shipping());
        assert_eq!(product.weight(), None);
        assert_eq!(product.shipment_unit(), None);
    }

    #[test]
    fn test_expiry_is_strictly_after_instant() {
        let expires_at = Utc::now();
        let product = scratch_card().with_expiry(expires_at);

        assert_eq!(product.variant(), ProductVariant::Expirable);
        assert!(!product.is_expired_at(expires_at));
        assert!(!product.is_expired_at(expires_at - Duration::seconds(1)));
        assert!(product.is_expired_at(expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_past_expiry_is_expired_now() {
        let product = scratch_card().with_expiry(Utc::now() - Duration::days(1));
        assert!(product.is_expired());
    }

    #[test]
    fn test_shippable_exposes_unit_view() {
        let tv = Product::new("TV", Money::from_dollars(300), 3)
            .unwrap()
            .with_weight(Weight::from_kilograms(5.0));

        assert_eq!(tv.variant(), ProductVariant::Shippable);
        assert!(tv.requires_shipping());
        assert!(!tv.is_expired());

        let unit = tv.shipment_unit().unwrap();
        assert_eq!(unit.name(), "TV");
        assert_eq!(unit.weight().grams(), 5000);
    }

    #[test]
    fn test_reserve_decrements_exactly() {
        let product = scratch_card();
        product.reserve(3);
        assert_eq!(product.available_quantity(), 7);
        product.reserve(7);
        assert_eq!(product.available_quantity(), 0);
    }

    #[test]
    fn test_reserve_saturates_at_zero() {
        let product = scratch_card();
        product.reserve(11);
        assert_eq!(product.available_quantity(), 0);
    }

    #[test]
    fn test_restock_returns_units() {
        let product = scratch_card();
        product.reserve(4);
        product.restock(4);
        assert_eq!(product.available_quantity(), 10);
    }

    #[test]
    fn test_try_reserve_refuses_without_side_effect() {
        let product = scratch_card();
        assert_eq!(product.try_reserve(11), Err(10));
        assert_eq!(product.available_quantity(), 10);
        assert_eq!(product.try_reserve(10), Ok(()));
        assert_eq!(product.available_quantity(), 0);
    }
}
