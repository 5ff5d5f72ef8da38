//! # Lemonade Stand
//!
//! The aggregate root: a menu keyed by item name plus an append-only sales
//! record keyed by day.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stand Operations                                     │
//! │                                                                         │
//! │  Caller Action            Method                   State Change         │
//! │  ─────────────            ──────                   ────────────         │
//! │                                                                         │
//! │  Add menu item ─────────► register_item() ───────► menu[name] = item    │
//! │                                                                         │
//! │  Close out a day ───────► submit_daily_sales() ──► validate all names   │
//! │                                                     then push record    │
//! │                                                     then current_day++  │
//! │                                                                         │
//! │  Ask for figures ───────► quantity_sold()        ► (read only)          │
//! │                           total_quantity_sold()                         │
//! │                           total_profit_for_item()                       │
//! │                           total_profit()                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Queries are total: an unknown day or item reads as zero.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{StandError, StandResult};
use crate::report::ProfitReport;
use crate::types::{DailySales, MenuItem};
use crate::validation::validate_menu_item;

/// A stand with a menu and a day-by-day sales record.
///
/// ## Invariants
/// - Every item named in the sales record was on the menu when that day was
///   submitted
/// - `sales_record[i].day() == i`, and `current_day == sales_record.len()`
/// - Nothing is ever removed from the menu or the sales record
#[derive(Debug, Clone, Serialize)]
pub struct LemonadeStand {
    name: String,
    current_day: u32,
    menu: BTreeMap<String, MenuItem>,
    sales_record: Vec<DailySales>,
}

impl LemonadeStand {
    /// Creates a stand with an empty menu, starting at day 0.
    pub fn new(name: impl Into<String>) -> Self {
        LemonadeStand {
            name: name.into(),
            current_day: 0,
            menu: BTreeMap::new(),
            sales_record: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Day index the next successful submission will receive.
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn menu_item(&self, item_name: &str) -> Option<&MenuItem> {
        self.menu.get(item_name)
    }

    /// Menu items in name order.
    pub fn menu(&self) -> impl Iterator<Item = &MenuItem> {
        self.menu.values()
    }

    pub fn sales_record(&self) -> &[DailySales] {
        &self.sales_record
    }

    pub fn day_sales(&self, day: u32) -> Option<&DailySales> {
        self.sales_record.iter().find(|record| record.day() == day)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds an item to the menu, replacing any item with the same name.
    pub fn register_item(&mut self, item: MenuItem) {
        debug!(
            stand = %self.name,
            item = %item.name(),
            cost = item.wholesale_cost(),
            price = item.selling_price(),
            "Menu item registered"
        );
        self.menu.insert(item.name().to_string(), item);
    }

    /// Adds an item to the menu after strict checks.
    ///
    /// ## Rules
    /// - Name must be non-empty and at most 100 characters
    /// - Cost and price must be finite and non-negative
    /// - Price must not be below cost
    ///
    /// On failure the menu is left unchanged.
    pub fn try_register_item(&mut self, item: MenuItem) -> StandResult<()> {
        validate_menu_item(&item)?;
        self.register_item(item);
        Ok(())
    }

    /// Records today's sales and advances to the next day.
    ///
    /// Every item name must be on the menu. If any is missing the call fails
    /// with [`StandError::InvalidSalesItem`] and neither the sales record nor
    /// the day counter changes.
    ///
    /// ## Example
    /// ```rust
    /// use stand_core::{LemonadeStand, MenuItem, StandError};
    ///
    /// let mut stand = LemonadeStand::new("Lemons R Us");
    /// stand.register_item(MenuItem::new("lemonade", 0.5, 1.5));
    ///
    /// let day = stand.submit_daily_sales([("lemonade", 5)]).unwrap();
    /// assert_eq!(day.day(), 0);
    ///
    /// let err = stand.submit_daily_sales([("kale", 1)]).unwrap_err();
    /// assert_eq!(err, StandError::InvalidSalesItem("kale".to_string()));
    /// assert_eq!(stand.current_day(), 1);
    /// ```
    pub fn submit_daily_sales<I, K>(&mut self, sales: I) -> StandResult<&DailySales>
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        let record = DailySales::new(self.current_day, sales);

        if let Some(unknown) = record
            .quantities()
            .keys()
            .find(|name| !self.menu.contains_key(name.as_str()))
        {
            warn!(
                stand = %self.name,
                day = self.current_day,
                item = %unknown,
                "Sales rejected, item not on the menu"
            );
            return Err(StandError::InvalidSalesItem(unknown.clone()));
        }

        debug!(
            stand = %self.name,
            day = record.day(),
            items = record.quantities().len(),
            units = record.items_sold(),
            "Daily sales recorded"
        );

        let index = self.sales_record.len();
        self.sales_record.push(record);
        self.current_day += 1;
        Ok(&self.sales_record[index])
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Units of `item_name` sold on `day`. Zero for unknown days or items.
    pub fn quantity_sold(&self, day: u32, item_name: &str) -> u32 {
        self.day_sales(day)
            .map_or(0, |record| record.quantity_of(item_name))
    }

    /// Units of `item_name` sold across every recorded day.
    pub fn total_quantity_sold(&self, item_name: &str) -> u64 {
        self.sales_record
            .iter()
            .map(|record| u64::from(record.quantity_of(item_name)))
            .sum()
    }

    /// Total units sold times profit per unit. Zero when the item is not on
    /// the menu.
    pub fn total_profit_for_item(&self, item_name: &str) -> f64 {
        match self.menu.get(item_name) {
            Some(item) => self.total_quantity_sold(item_name) as f64 * item.profit_per_unit(),
            None => 0.0,
        }
    }

    /// Profit summed over every menu item.
    pub fn total_profit(&self) -> f64 {
        self.menu
            .keys()
            .fold(0.0, |total, name| total + self.total_profit_for_item(name))
    }

    /// Per-item profit breakdown for the whole sales record.
    pub fn profit_report(&self) -> ProfitReport {
        ProfitReport::from_stand(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
