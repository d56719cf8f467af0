//! Demo checkout entry point.

use chrono::Utc;
use cli::config::{Config, OutputFormat};
use cli::error::CliError;
use cli::scenario::Scenario;
use domain::{ConsoleShippingNotifier, DomainError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn execute(config: &Config) -> Result<(), CliError> {
    let mut scenario =
        Scenario::demo(Utc::now(), config.customer_balance).map_err(DomainError::from)?;

    match config.output {
        OutputFormat::Text => {
            // the console notifier prints the shipment notice before the receipt
            let receipt = cli::run(&mut scenario, config, ConsoleShippingNotifier)?;
            println!("{receipt}");
        }
        OutputFormat::Json => {
            let report = cli::run_report(&mut scenario, config)?;
            println!("{}", cli::render_json(&report)?);
        }
    }

    Ok(())
}

fn main() {
    // logs go to stderr, stdout carries only the receipt
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    tracing::info!(?config, "starting demo checkout");

    if let Err(e) = execute(&config) {
        println!("ERROR: {e}");
    }
}
