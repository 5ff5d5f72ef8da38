//! # Profit Report
//!
//! A serializable snapshot of what a stand has earned, one line per menu item.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Lemons R Us                     days recorded: 1            │
//! │  ──────────────────────────────────────────────────────────  │
//! │  cookie      2 × $0.75  = $1.50                              │
//! │  lemonade    5 × $1.00  = $5.00                              │
//! │  nori        0 × $0.20  = $0.00                              │
//! │  ──────────────────────────────────────────────────────────  │
//! │  total                    $6.50                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::stand::LemonadeStand;

/// Profit figures for one menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProfit {
    pub name: String,
    pub units_sold: u64,
    pub profit_per_unit: f64,
    pub profit: f64,
}

/// Profit figures for a whole stand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitReport {
    pub stand: String,
    pub days_recorded: u32,
    /// Menu items in name order.
    pub items: Vec<ItemProfit>,
    pub total_profit: f64,
}

impl ProfitReport {
    /// Builds the report from the stand's current menu and sales record.
    pub fn from_stand(stand: &LemonadeStand) -> Self {
        let items = stand
            .menu()
            .map(|item| ItemProfit {
                name: item.name().to_string(),
                units_sold: stand.total_quantity_sold(item.name()),
                profit_per_unit: item.profit_per_unit(),
                profit: stand.total_profit_for_item(item.name()),
            })
            .collect();

        ProfitReport {
            stand: stand.name().to_string(),
            days_recorded: stand.current_day(),
            items,
            total_profit: stand.total_profit(),
        }
    }

    /// Line for `item_name`, if it is on the menu.
    pub fn item(&self, item_name: &str) -> Option<&ItemProfit> {
        self.items.iter().find(|line| line.name == item_name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
