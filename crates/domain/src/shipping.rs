//! Shipping notifier trait and implementations.

use std::io::Write;
use std::sync::{Arc, RwLock};

use common::Weight;
use serde::{Deserialize, Serialize};

use crate::catalog::ShipmentUnit;

/// Everything that has to be shipped for one checkout, one entry per unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentNotice {
    units: Vec<ShipmentUnit>,
}

impl ShipmentNotice {
    pub fn new(units: Vec<ShipmentUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[ShipmentUnit] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Aggregate weight of every unit.
    pub fn total_weight(&self) -> Weight {
        self.units.iter().map(ShipmentUnit::weight).sum()
    }
}

impl std::fmt::Display for ShipmentNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "** Shipment notice **")?;
        for unit in &self.units {
            writeln!(f, "{} {}", unit.name(), unit.weight())?;
        }
        write!(
            f,
            "Total package weight {:.1}kg",
            self.total_weight().kilograms()
        )
    }
}

/// Receives the shipment notice of a successful checkout.
///
/// Notification is a pure report: it cannot fail and must not change any
/// entity.
pub trait ShippingNotifier {
    fn notify(&self, notice: &ShipmentNotice);
}

impl<T: ShippingNotifier + ?Sized> ShippingNotifier for &T {
    fn notify(&self, notice: &ShipmentNotice) {
        (**self).notify(notice);
    }
}

/// Prints shipment notices to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleShippingNotifier;

impl ShippingNotifier for ConsoleShippingNotifier {
    fn notify(&self, notice: &ShipmentNotice) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{notice}") {
            tracing::error!(error = %e, "failed to write shipment notice");
        }
    }
}

/// Discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopShippingNotifier;

impl ShippingNotifier for NoopShippingNotifier {
    fn notify(&self, _notice: &ShipmentNotice) {}
}

/// In-memory notifier for testing.
///
/// Clones share the same recorded notices.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShippingNotifier {
    notices: Arc<RwLock<Vec<ShipmentNotice>>>,
}

impl InMemoryShippingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notice received so far.
    pub fn notices(&self) -> Vec<ShipmentNotice> {
        self.notices
            .read()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    pub fn notice_count(&self) -> usize {
        self.notices.read().map(|notices| notices.len()).unwrap_or(0)
    }
}

impl ShippingNotifier for InMemoryShippingNotifier {
    fn notify(&self, notice: &ShipmentNotice) {
        match self.notices.write() {
            Ok(mut notices) => notices.push(notice.clone()),
            Err(e) => tracing::error!(error = %e, "shipment notice store poisoned"),
        }
    }
}
