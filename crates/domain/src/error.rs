//! Domain error types.

use common::Money;
use thiserror::Error;

/// Errors raised while building catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Unit price must not be negative.
    #[error("Invalid price: {price} (must not be negative)")]
    InvalidPrice { price: Money },
}

/// Errors raised while filling a cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Requested quantity exceeds the product's available stock.
    #[error("Cannot add {requested} of {product}: exceeds available stock ({available})")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },
}

/// Errors raised while building checkout settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid shipping fee: {fee} (must not be negative)")]
    NegativeShippingFee { fee: Money },
}

/// Errors raised by the checkout routine.
///
/// Every variant is detected before any shipping notification, receipt or
/// balance deduction takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// A line's product is past its expiry instant.
    #[error("{name} is expired")]
    ExpiredProduct { name: String },

    /// The customer balance is below the computed total.
    #[error("Insufficient balance for the total amount of {total} (balance {balance})")]
    InsufficientFunds { total: Money, balance: Money },

    /// A line total, the shipping fee or the order total does not fit in
    /// the money representation.
    #[error("Order total exceeds the representable amount")]
    AmountOverflow,
}

/// Errors that can occur during domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
