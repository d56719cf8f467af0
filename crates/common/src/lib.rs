//! Value objects shared across the checkout workspace.

pub mod customer_id;
pub mod money;
pub mod weight;

pub use customer_id::CustomerId;
pub use money::Money;
pub use weight::Weight;
