//! # Error Types
//!
//! Domain-specific error types for stand-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stand-core errors (this file)                                         │
//! │  ├── StandError       - Rejected stand operations                      │
//! │  └── ValidationError  - Strict menu checks                             │
//! │                                                                         │
//! │  stand-cli errors (driver)                                             │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → StandError → caller                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Queries never return errors. An unknown day or item reads as zero.

use thiserror::Error;

// =============================================================================
// Stand Error
// =============================================================================

/// Errors returned by [`LemonadeStand`](crate::LemonadeStand) mutations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StandError {
    /// A day's sales named an item that is not on the menu.
    ///
    /// ## User Workflow
    /// ```text
    /// submit_daily_sales({ lemonade: 5, not_in_the_menu: 1 })
    ///      │
    ///      ▼
    /// Check every name against the menu
    ///      │
    ///      ▼
    /// InvalidSalesItem("not_in_the_menu")
    ///      │
    ///      ▼
    /// Ledger and day counter untouched
    /// ```
    #[error("'{0}' not in the menu")]
    InvalidSalesItem(String),

    /// A menu item failed strict registration checks.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StandError {
    /// Returns the offending item name for an invalid sale.
    pub fn invalid_item(&self) -> Option<&str> {
        match self {
            StandError::InvalidSalesItem(name) => Some(name),
            StandError::Validation(_) => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Strict menu validation errors.
///
/// Only produced by [`try_register_item`](crate::LemonadeStand::try_register_item).
/// Plain registration accepts anything.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Amount is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Amount is below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: f64 },

    /// Selling below wholesale.
    #[error("selling price {price} is below wholesale cost {cost}")]
    BelowCost { cost: f64, price: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StandError.
pub type StandResult<T> = Result<T, StandError>;

// =============================================================================
// Unit Tests
// =============================================================================
