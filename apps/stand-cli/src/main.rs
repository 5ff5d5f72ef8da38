//! # Lemonade Stand Driver
//!
//! Sets up a stand, registers the house menu, and enters one day of sales.
//!
//! ## Usage
//! ```bash
//! # Default run
//! cargo run -p stand-cli
//!
//! # Strict menu checks, JSON profit report, verbose logs
//! STAND_STRICT_MENU=true STAND_REPORT_JSON=true RUST_LOG=debug cargo run -p stand-cli
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Register the menu
//! 4. Submit today's sales, reporting an off-menu item instead of failing

mod config;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stand_core::{LemonadeStand, MenuItem, StandError, StandResult};

use crate::config::CliConfig;

/// The house menu: name, wholesale cost, selling price.
const MENU: &[(&str, f64, f64)] = &[
    ("lemonade", 0.5, 1.5),
    ("nori", 0.6, 0.8),
    ("cookie", 0.2, 1.0),
];

/// Day 0 sales. `not_in_the_menu` is rejected by the stand.
const DAY_0_SALES: &[(&str, u32)] = &[("lemonade", 5), ("cookie", 2), ("not_in_the_menu", 1)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = CliConfig::load()?;
    info!(
        stand = %config.stand_name,
        strict_menu = config.strict_menu,
        report_json = config.report_json,
        "Configuration loaded"
    );

    let stand = run(&config)?;

    if config.report_json {
        println!("{}", serde_json::to_string_pretty(&stand.profit_report())?);
    }

    Ok(())
}

/// Builds the stand and enters the day's sales.
///
/// An off-menu sale is printed and swallowed. Strict menu failures propagate.
fn run(config: &CliConfig) -> StandResult<LemonadeStand> {
    let mut stand = LemonadeStand::new(config.stand_name.as_str());

    for &(name, cost, price) in MENU {
        let item = MenuItem::new(name, cost, price);
        if config.strict_menu {
            stand.try_register_item(item)?;
        } else {
            stand.register_item(item);
        }
    }
    info!(stand = %stand.name(), items = stand.menu().count(), "Menu ready");

    match stand.submit_daily_sales(DAY_0_SALES.iter().copied()) {
        Ok(record) => info!(day = record.day(), units = record.items_sold(), "Sales entered"),
        Err(err @ StandError::InvalidSalesItem(_)) => {
            warn!(error = %err, "Sales not entered");
            println!("Error: {}", err);
        }
        Err(err) => return Err(err),
    }

    Ok(stand)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stand_core=trace` - Show trace for the core crate only
/// - Default: INFO, DEBUG for stand crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stand_core=debug,stand=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
