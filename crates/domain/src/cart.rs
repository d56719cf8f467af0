//! Shopping cart holding stock reservations.

use std::sync::Arc;

use common::Money;

use crate::catalog::Product;
use crate::error::CartError;

/// A reserved line in a cart.
#[derive(Debug, Clone)]
pub struct CartItem {
    product: Arc<Product>,
    quantity: u32,
}

impl CartItem {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Quantity times unit price, or `None` if that overflows.
    pub fn line_total(&self) -> Option<Money> {
        self.product.price().checked_multiply(self.quantity)
    }
}

/// Ordered collection of reservations for one checkout session.
///
/// Adding a product reserves the stock on the product immediately. A later
/// failed `add` or failed checkout leaves earlier reservations in place; use
/// [`Cart::release`] to hand them back explicitly.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves `quantity` units of `product` and appends a line.
    ///
    /// Fails iff `quantity` exceeds the product's available quantity at call
    /// time. Adding the same product twice creates two lines.
    #[tracing::instrument(skip(self, product), fields(product = product.name(), variant = %product.variant()))]
    pub fn add(&mut self, product: &Arc<Product>, quantity: u32) -> Result<(), CartError> {
        product
            .try_reserve(quantity)
            .map_err(|available| CartError::InsufficientStock {
                product: product.name().to_string(),
                requested: quantity,
                available,
            })?;

        metrics::counter!("cart_reservations_total").increment(1);
        tracing::debug!(
            remaining = product.available_quantity(),
            "stock reserved"
        );

        self.items.push(CartItem {
            product: Arc::clone(product),
            quantity,
        });
        Ok(())
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns every reserved unit to its product and empties the cart.
    pub fn release(&mut self) {
        for item in self.items.drain(..) {
            item.product.restock(item.quantity);
            tracing::debug!(
                product = item.product.name(),
                quantity = item.quantity,
                "reservation released"
            );
        }
    }
}
