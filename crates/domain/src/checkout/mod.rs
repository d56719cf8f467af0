//! Checkout routine and its receipt.

mod config;
mod receipt;
mod service;

pub use config::{CheckoutConfig, DEFAULT_SHIPPING_FEE_PER_UNIT_CENTS};
pub use receipt::{Receipt, ReceiptLine};
pub use service::{CheckoutService, Quote};
