//! # Domain Types
//!
//! The two value types a stand is built from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌──────────────────────────┐           │
//! │  │    MenuItem     │            │        DailySales        │           │
//! │  │  ─────────────  │  name ◄────┤  ──────────────────────  │           │
//! │  │  name (key)     │            │  day (0, 1, 2, ...)      │           │
//! │  │  wholesale_cost │            │  quantities: name → qty  │           │
//! │  │  selling_price  │            └──────────────────────────┘           │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both are immutable once built. Amounts are plain `f64`; the ledger makes
//! no rounding promises beyond native floating point.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Menu Item
// =============================================================================

/// An item the stand can sell.
///
/// Identity is the `name`. No checks run on construction: negative costs or a
/// price below cost are accepted. Use
/// [`LemonadeStand::try_register_item`](crate::LemonadeStand::try_register_item)
/// for strict checks.
///
/// ## Example
/// ```rust
/// use stand_core::MenuItem;
///
/// let lemonade = MenuItem::new("lemonade", 0.5, 1.5);
/// assert_eq!(lemonade.name(), "lemonade");
/// assert_eq!(lemonade.profit_per_unit(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    wholesale_cost: f64,
    selling_price: f64,
}

impl MenuItem {
    /// Creates a menu item from its name, wholesale cost and selling price.
    pub fn new(name: impl Into<String>, wholesale_cost: f64, selling_price: f64) -> Self {
        MenuItem {
            name: name.into(),
            wholesale_cost,
            selling_price,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn wholesale_cost(&self) -> f64 {
        self.wholesale_cost
    }

    #[inline]
    pub fn selling_price(&self) -> f64 {
        self.selling_price
    }

    /// Selling price minus wholesale cost. Negative when sold at a loss.
    #[inline]
    pub fn profit_per_unit(&self) -> f64 {
        self.selling_price - self.wholesale_cost
    }
}

// =============================================================================
// Daily Sales
// =============================================================================

/// Units sold per item on one day.
///
/// The quantities are collected into a map owned by this record, so the
/// caller's own map can change afterwards without touching the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySales {
    day: u32,
    quantities: BTreeMap<String, u32>,
}

impl DailySales {
    /// Creates a record for `day` from `(item, quantity)` pairs.
    ///
    /// A repeated item keeps its last quantity.
    pub fn new<I, K>(day: u32, quantities: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        DailySales {
            day,
            quantities: quantities
                .into_iter()
                .map(|(name, qty)| (name.into(), qty))
                .collect(),
        }
    }

    /// Zero-based day index.
    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Read-only view of the quantities sold.
    #[inline]
    pub fn quantities(&self) -> &BTreeMap<String, u32> {
        &self.quantities
    }

    /// Units of `item_name` sold that day, zero if absent.
    pub fn quantity_of(&self, item_name: &str) -> u32 {
        self.quantities.get(item_name).copied().unwrap_or(0)
    }

    /// Total units of every item sold that day.
    pub fn items_sold(&self) -> u64 {
        self.quantities.values().map(|&qty| u64::from(qty)).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_accessors() {
        let cookie = MenuItem::new("cookie", 0.2, 1.0);
        assert_eq!(cookie.name(), "cookie");
        assert_eq!(cookie.wholesale_cost(), 0.2);
        assert_eq!(cookie.selling_price(), 1.0);
        assert_eq!(cookie.profit_per_unit(), 1.0 - 0.2);
    }

    #[test]
    fn test_menu_item_accepts_loss() {
        let nori = MenuItem::new("nori", 0.8, 0.6);
        assert!(nori.profit_per_unit() < 0.0);
    }

    #[test]
    fn test_daily_sales_copies_input() {
        let mut source = BTreeMap::new();
        source.insert("lemonade".to_string(), 5);

        let record = DailySales::new(0, source.clone());
        source.insert("lemonade".to_string(), 99);
        source.insert("cookie".to_string(), 1);

        assert_eq!(record.quantity_of("lemonade"), 5);
        assert_eq!(record.quantity_of("cookie"), 0);
        assert_eq!(record.quantities().len(), 1);
    }

    #[test]
    fn test_daily_sales_totals() {
        let record = DailySales::new(3, [("lemonade", 5), ("cookie", 2)]);
        assert_eq!(record.day(), 3);
        assert_eq!(record.items_sold(), 7);
        assert_eq!(record.quantity_of("nori"), 0);
    }

    #[test]
    fn test_daily_sales_last_duplicate_wins() {
        let record = DailySales::new(0, [("cookie", 2), ("cookie", 4)]);
        assert_eq!(record.quantity_of("cookie"), 4);
    }
}
