//! # Validation Module
//!
//! Strict checks for menu items.
//!
//! The ledger is permissive by default: [`LemonadeStand::register_item`]
//! accepts any item. These checks back the opt-in
//! [`LemonadeStand::try_register_item`] path.
//!
//! ## Usage
//! ```rust
//! use stand_core::validation::{validate_item_name, validate_amount};
//!
//! assert!(validate_item_name("lemonade").is_ok());
//! assert!(validate_item_name("   ").is_err());
//! assert!(validate_amount("wholesale cost", -0.5).is_err());
//! ```
//!
//! [`LemonadeStand::register_item`]: crate::LemonadeStand::register_item
//! [`LemonadeStand::try_register_item`]: crate::LemonadeStand::try_register_item

use crate::error::ValidationError;
use crate::types::MenuItem;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `MAX_ITEM_NAME_LEN` (100) characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cost or price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_amount(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    Ok(())
}

/// Validates that an item is not sold below what it costs.
pub fn validate_margin(cost: f64, price: f64) -> ValidationResult<()> {
    if price < cost {
        return Err(ValidationError::BelowCost { cost, price });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Runs every strict check against a menu item, stopping at the first failure.
pub fn validate_menu_item(item: &MenuItem) -> ValidationResult<()> {
    validate_item_name(item.name())?;
    validate_amount("wholesale cost", item.wholesale_cost())?;
    validate_amount("selling price", item.selling_price())?;
    validate_margin(item.wholesale_cost(), item.selling_price())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("lemonade").is_ok());
        assert!(validate_item_name("iced tea").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"a".repeat(MAX_ITEM_NAME_LEN)).is_ok());
        assert!(validate_item_name(&"a".repeat(MAX_ITEM_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("price", 0.0).is_ok());
        assert!(validate_amount("price", 1.5).is_ok());

        assert!(matches!(
            validate_amount("price", -0.01),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_amount("price", f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(validate_amount("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_margin() {
        assert!(validate_margin(0.5, 1.5).is_ok());
        assert!(validate_margin(0.5, 0.5).is_ok());
        assert!(validate_margin(0.8, 0.6).is_err());
    }

    #[test]
    fn test_validate_menu_item() {
        assert!(validate_menu_item(&MenuItem::new("cookie", 0.2, 1.0)).is_ok());

        let err = validate_menu_item(&MenuItem::new("", 0.2, 1.0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "name".to_string()
            }
        );

        let err = validate_menu_item(&MenuItem::new("cookie", -0.2, 1.0)).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { .. }));
    }
}
