//! Checkout routine: validation, pricing, shipping and payment.

use chrono::{DateTime, Utc};
use common::Money;

use super::{CheckoutConfig, Receipt, ReceiptLine};
use crate::cart::Cart;
use crate::customer::Customer;
use crate::error::CheckoutError;
use crate::shipping::{ShipmentNotice, ShippingNotifier};

/// Totals computed for a cart before any payment happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Priced lines in cart insertion order.
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    pub notice: ShipmentNotice,
}

/// Settles carts against customer balances.
pub struct CheckoutService<N: ShippingNotifier> {
    config: CheckoutConfig,
    notifier: N,
}

impl<N: ShippingNotifier> CheckoutService<N> {
    pub fn new(config: CheckoutConfig, notifier: N) -> Self {
        Self { config, notifier }
    }

    /// Returns a reference to the underlying notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Checks out `cart`, evaluating expiry as of now.
    pub fn checkout(
        &self,
        customer: &mut Customer,
        cart: &Cart,
    ) -> Result<Receipt, CheckoutError> {
        self.checkout_at(customer, cart, Utc::now())
    }

    /// Checks out `cart`, evaluating expiry at `now`.
    ///
    /// All validation happens before any side effect: on error the customer
    /// balance is untouched and the notifier is not called. Cart reservations
    /// are never rolled back here.
    #[tracing::instrument(skip(self, customer, cart), fields(customer = %customer.id(), lines = cart.len()))]
    pub fn checkout_at(
        &self,
        customer: &mut Customer,
        cart: &Cart,
        now: DateTime<Utc>,
    ) -> Result<Receipt, CheckoutError> {
        metrics::counter!("checkout_attempts_total").increment(1);

        let quote = self.quote_at(cart, now)?;

        if !customer.can_afford(quote.total) {
            return Err(self.fail(CheckoutError::InsufficientFunds {
                total: quote.total,
                balance: customer.balance(),
            }));
        }

        if quote.notice.is_empty() {
            tracing::debug!("nothing to ship, skipping shipment notice");
        } else {
            self.notifier.notify(&quote.notice);
        }

        customer.deduct(quote.total);

        metrics::counter!("checkout_completed_total").increment(1);
        metrics::histogram!("checkout_total_cents").record(quote.total.cents() as f64);
        tracing::info!(
            total = %quote.total,
            balance_after = %customer.balance(),
            "checkout completed"
        );

        Ok(Receipt {
            customer: customer.id(),
            lines: quote.lines,
            subtotal: quote.subtotal,
            shipping: quote.shipping,
            total: quote.total,
            balance_after: customer.balance(),
        })
    }

    /// Validates `cart` and prices it without charging anyone.
    ///
    /// Any amount that does not fit in [`Money`] fails with
    /// [`CheckoutError::AmountOverflow`].
    pub fn quote_at(&self, cart: &Cart, now: DateTime<Utc>) -> Result<Quote, CheckoutError> {
        if cart.is_empty() {
            return Err(self.fail(CheckoutError::EmptyCart));
        }

        let mut lines = Vec::with_capacity(cart.len());
        let mut subtotal = Money::zero();
        let mut shipping = Money::zero();
        let mut units = Vec::new();

        for item in cart.items() {
            let product = item.product();
            if product.is_expired_at(now) {
                return Err(self.fail(CheckoutError::ExpiredProduct {
                    name: product.name().to_string(),
                }));
            }

            let line_total = item.line_total().ok_or_else(|| self.overflow())?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or_else(|| self.overflow())?;

            if let Some(unit) = product.shipment_unit() {
                units.extend(std::iter::repeat_n(unit, item.quantity() as usize));
                shipping = self
                    .config
                    .shipping_fee_per_unit()
                    .checked_multiply(item.quantity())
                    .and_then(|fee| shipping.checked_add(fee))
                    .ok_or_else(|| self.overflow())?;
            }

            lines.push(ReceiptLine {
                quantity: item.quantity(),
                name: product.name().to_string(),
                line_total,
            });
        }

        let total = subtotal
            .checked_add(shipping)
            .ok_or_else(|| self.overflow())?;

        Ok(Quote {
            lines,
            subtotal,
            shipping,
            total,
            notice: ShipmentNotice::new(units),
        })
    }

    fn overflow(&self) -> CheckoutError {
        self.fail(CheckoutError::AmountOverflow)
    }

    fn fail(&self, err: CheckoutError) -> CheckoutError {
        metrics::counter!("checkout_failed_total").increment(1);
        tracing::warn!(error = %err, "checkout rejected");
        err
    }
}
