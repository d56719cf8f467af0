use serde::{Deserialize, Serialize};

/// Physical weight of a shippable item, stored in whole grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u32);

impl Weight {
    pub fn from_grams(grams: u32) -> Self {
        Self(grams)
    }

    /// Creates a weight from kilograms, rounded to the nearest gram.
    ///
    /// Negative and non-finite inputs clamp to zero.
    pub fn from_kilograms(kilograms: f64) -> Self {
        let grams = (kilograms * 1000.0).round();
        if grams.is_finite() && grams > 0.0 {
            Self(grams.min(f64::from(u32::MAX)) as u32)
        } else {
            Self(0)
        }
    }

    pub fn grams(&self) -> u32 {
        self.0
    }

    pub fn kilograms(&self) -> f64 {
        f64::from(self.0) / 1000.0
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}g", self.0)
    }
}

impl std::ops::Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Self) -> Self::Output {
        Weight(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::default(), |acc, w| acc + w)
    }
}
