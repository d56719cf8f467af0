//! Demo checkout runner.
//!
//! Builds the fixed demo scenario, fills a cart, checks it out and renders the
//! result either as the plain console layout or as JSON.

pub mod config;
pub mod error;
pub mod scenario;

use domain::{
    Cart, CheckoutService, DomainError, InMemoryShippingNotifier, Receipt, ShipmentNotice,
    ShippingNotifier,
};
use serde::Serialize;

use config::Config;
use scenario::Scenario;

/// Everything a successful run produced, in output order.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReport {
    pub shipments: Vec<ShipmentNotice>,
    pub receipt: Receipt,
}

/// Adds the scenario's lines to a fresh cart and checks it out.
///
/// Fails before touching the cart if the configured shipping fee is negative.
/// When `release_on_failure` is set, a failed add or checkout hands every
/// reservation made so far back to stock. Otherwise stock stays reserved.
#[tracing::instrument(skip_all, fields(customer = scenario.customer.name()))]
pub fn run<N: ShippingNotifier>(
    scenario: &mut Scenario,
    config: &Config,
    notifier: N,
) -> Result<Receipt, DomainError> {
    let service = CheckoutService::new(config.checkout_config()?, notifier);
    let mut cart = Cart::new();

    let result = fill_and_checkout(&service, &mut cart, scenario);

    if let Err(e) = &result {
        if config.release_on_failure {
            cart.release();
            tracing::info!(error = %e, "released cart reservations after failure");
        } else {
            tracing::warn!(
                error = %e,
                lines = cart.len(),
                "cart reservations kept after failure"
            );
        }
    }

    result
}

fn fill_and_checkout<N: ShippingNotifier>(
    service: &CheckoutService<N>,
    cart: &mut Cart,
    scenario: &mut Scenario,
) -> Result<Receipt, DomainError> {
    for (product, quantity) in &scenario.adds {
        cart.add(product, *quantity)?;
    }

    Ok(service.checkout_at(&mut scenario.customer, cart, scenario.now)?)
}

/// Runs the scenario and collects the shipment notices alongside the receipt.
pub fn run_report(scenario: &mut Scenario, config: &Config) -> Result<CheckoutReport, DomainError> {
    let notifier = InMemoryShippingNotifier::new();
    let receipt = run(scenario, config, notifier.clone())?;

    Ok(CheckoutReport {
        shipments: notifier.notices(),
        receipt,
    })
}

/// Renders a report as pretty-printed JSON.
pub fn render_json(report: &CheckoutReport) -> error::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders a report in the console layout: shipment notices, then receipt.
pub fn render_text(report: &CheckoutReport) -> String {
    let mut out = String::new();
    for notice in &report.shipments {
        out.push_str(&notice.to_string());
        out.push('\n');
    }
    out.push_str(&report.receipt.to_string());
    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use common::Money;

    use super::*;

    fn demo(balance: Money) -> Scenario {
        Scenario::demo(Utc::now(), balance).unwrap()
    }

    #[test]
    fn test_run_report_collects_shipments() {
        let mut scenario = demo(Money::from_dollars(500));

        let report = run_report(&mut scenario, &Config::default()).unwrap();

        assert_eq!(report.shipments.len(), 1);
        assert_eq!(report.receipt.total, Money::from_dollars(480));
        assert_eq!(scenario.customer.balance(), Money::from_dollars(20));
    }

    #[test]
    fn test_render_text_puts_notice_first() {
        let mut scenario = demo(Money::from_dollars(500));
        let report = run_report(&mut scenario, &Config::default()).unwrap();

        let text = render_text(&report);

        assert!(text.starts_with("** Shipment notice **\n"));
        assert!(text.contains("Total package weight 1.1kg\n** Checkout receipt **\n"));
        assert!(text.ends_with("Customer balance after payment: $20.00\nEND."));
    }

    #[test]
    fn test_render_json() {
        let mut scenario = demo(Money::from_dollars(500));
        let report = run_report(&mut scenario, &Config::default()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert_eq!(json["receipt"]["total"]["cents"], 48_000);
        assert_eq!(json["receipt"]["lines"][0]["name"], "Cheese");
        assert_eq!(json["shipments"][0]["units"].as_array().unwrap().len(), 3);
        assert_eq!(
            json["receipt"]["customer"],
            scenario.customer.id().to_string()
        );
    }

    #[test]
    fn test_negative_fee_fails_before_reserving() {
        let mut scenario = demo(Money::from_dollars(500));
        let config = Config {
            shipping_fee_per_unit: Money::from_cents(-100),
            ..Config::default()
        };

        let err = run_report(&mut scenario, &config).unwrap_err();

        assert_eq!(
            err,
            DomainError::Config(domain::ConfigError::NegativeShippingFee {
                fee: Money::from_cents(-100)
            })
        );
        assert_eq!(scenario.product("Cheese").unwrap().available_quantity(), 5);
        assert_eq!(scenario.customer.balance(), Money::from_dollars(500));
    }
}
