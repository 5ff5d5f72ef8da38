//! # stand-core: Pure Business Logic for a Lemonade Stand
//!
//! Menu items, a day-by-day sales record, and the profit figures derived
//! from them. No I/O of any kind.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stand-cli (driver binary)                       │   │
//! │  │    tracing setup ──► env config ──► register menu ──► submit    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stand-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   stand   │  │  report   │  │ validation│  │   │
//! │  │   │ MenuItem  │  │ Lemonade  │  │  Profit   │  │  strict   │  │   │
//! │  │   │DailySales │  │   Stand   │  │  Report   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • SYNCHRONOUS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `MenuItem` and `DailySales` value types
//! - [`stand`] - `LemonadeStand`, the aggregate holding menu and sales record
//! - [`report`] - Serializable per-item profit breakdown
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in strict menu checks
//!
//! ## Example Usage
//!
//! ```rust
//! use stand_core::{LemonadeStand, MenuItem};
//!
//! let mut stand = LemonadeStand::new("Lemons R Us");
//! stand.register_item(MenuItem::new("lemonade", 0.5, 1.5));
//! stand.register_item(MenuItem::new("cookie", 0.2, 1.0));
//!
//! stand.submit_daily_sales([("lemonade", 5), ("cookie", 2)]).unwrap();
//!
//! assert_eq!(stand.quantity_sold(0, "lemonade"), 5);
//! assert_eq!(stand.total_profit_for_item("lemonade"), 5.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod report;
pub mod stand;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StandError, StandResult, ValidationError};
pub use report::{ItemProfit, ProfitReport};
pub use stand::LemonadeStand;
pub use types::{DailySales, MenuItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest menu item name accepted by strict registration.
pub const MAX_ITEM_NAME_LEN: usize = 100;
