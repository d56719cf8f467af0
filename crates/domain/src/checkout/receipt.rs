use common::{CustomerId, Money};
use serde::{Deserialize, Serialize};

/// One cart line as it appears on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub quantity: u32,
    pub name: String,
    /// Unit price times quantity.
    pub line_total: Money,
}

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Customer who paid.
    pub customer: CustomerId,
    /// Lines in cart insertion order.
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    /// Customer balance after the total was deducted.
    pub balance_after: Money,
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "** Checkout receipt **")?;
        for line in &self.lines {
            writeln!(f, "{}x {} {}", line.quantity, line.name, line.line_total)?;
        }
        writeln!(f, "----------------------")?;
        writeln!(f, "Subtotal {}", self.subtotal)?;
        writeln!(f, "Shipping {}", self.shipping)?;
        writeln!(f, "Total Amount {}", self.total)?;
        writeln!(f, "Customer balance after payment: {}", self.balance_after)?;
        write!(f, "END.")
    }
}
