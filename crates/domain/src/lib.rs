//! Domain layer for the retail checkout.
//!
//! This crate provides:
//! - `Product` with independent expiry and shipping capabilities
//! - `Cart`, which reserves stock on the product as lines are added
//! - `Customer` holding a spendable balance
//! - `ShippingNotifier` for reporting what has to be shipped
//! - `CheckoutService`, which validates, prices and settles a cart

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod shipping;

pub use cart::{Cart, CartItem};
pub use catalog::{Product, ProductVariant, ShipmentUnit};
pub use checkout::{CheckoutConfig, CheckoutService, Quote, Receipt, ReceiptLine};
pub use customer::Customer;
pub use error::{CartError, CatalogError, CheckoutError, ConfigError, DomainError};
pub use shipping::{
    ConsoleShippingNotifier, InMemoryShippingNotifier, NoopShippingNotifier, ShipmentNotice,
    ShippingNotifier,
};
