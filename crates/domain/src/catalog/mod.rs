//! Product catalog: products and their optional capabilities.

mod capability;
mod product;

pub use capability::{ProductVariant, ShipmentUnit};
pub use product::Product;
