//! Optional product capabilities.

use common::Weight;
use serde::{Deserialize, Serialize};

/// Which of the two optional capabilities a product carries.
///
/// The variant is derived from the product's capabilities and cannot be set
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductVariant {
    /// Neither expires nor requires shipping.
    Base,
    /// Has an expiry instant.
    Expirable,
    /// Has a weight and must be shipped.
    Shippable,
    /// Both expires and must be shipped.
    ExpirableShippable,
}

impl ProductVariant {
    pub(crate) fn from_capabilities(expirable: bool, shippable: bool) -> Self {
        match (expirable, shippable) {
            (false, false) => ProductVariant::Base,
            (true, false) => ProductVariant::Expirable,
            (false, true) => ProductVariant::Shippable,
            (true, true) => ProductVariant::ExpirableShippable,
        }
    }

    /// Returns the variant name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductVariant::Base => "Base",
            ProductVariant::Expirable => "Expirable",
            ProductVariant::Shippable => "Shippable",
            ProductVariant::ExpirableShippable => "ExpirableShippable",
        }
    }
}

impl std::fmt::Display for ProductVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One physical item that has to be shipped.
///
/// This is the shipping-capable view of a product: only shippable products
/// can produce one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentUnit {
    name: String,
    weight: Weight,
}

impl ShipmentUnit {
    pub fn new(name: impl Into<String>, weight: Weight) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
