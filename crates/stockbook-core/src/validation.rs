//! # Validation Module
//!
//! Input validation utilities for Stockbook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: UI forms                                                  │
//! │  ├── Coerce free text to the expected primitive types               │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE, called by every store mutation               │
//! │  ├── Required / length / charset checks                             │
//! │  └── Non-negative price and quantity checks                         │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Business rules in the store                               │
//! │  ├── SKU uniqueness, category-name uniqueness                       │
//! │  └── Ledger arithmetic (NegativeStock, InvalidQuantity)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockbook_core::validation::{validate_product_name, validate_sku};
//!
//! validate_product_name("Coca-Cola 330ml").unwrap();
//! validate_sku("COKE-330").unwrap();
//! validate_sku("").unwrap(); // SKUs are optional
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_SKU_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required_name(name, "name")
}

/// Validates a category name.
///
/// Same rules as product names. Case-insensitive uniqueness is a store
/// concern, not checked here.
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_required_name(name, "category name")
}

fn validate_required_name(name: &str, field: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Empty is allowed (the SKU is an optional business id)
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Ok(());
    }

    if sku.len() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates login credentials.
///
/// Demo-grade policy: any non-empty email and password pair is acceptable.
pub fn validate_credentials(email: &str, password: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed: an ADJUST to 0 clears stock, and new products may
///   start empty
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a reorder level.
pub fn validate_reorder_level(level: i64) -> ValidationResult<()> {
    if level < 0 {
        return Err(ValidationError::Negative {
            field: "reorder level".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Coca-Cola 330ml").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_category_name() {
        assert!(validate_category_name("Beverages").is_ok());
        assert!(validate_category_name("").is_err());
    }

    #[test]
    fn test_validate_sku() {
        // Valid SKUs
        assert!(validate_sku("COKE-330").is_ok());
        assert!(validate_sku("ABC123").is_ok());
        assert!(validate_sku("product_1").is_ok());

        // Optional: empty (and whitespace-only) is fine
        assert!(validate_sku("").is_ok());
        assert!(validate_sku("   ").is_ok());

        // Invalid SKUs
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("admin@example.com", "hunter2").is_ok());
        assert!(validate_credentials("", "hunter2").is_err());
        assert!(validate_credentials("admin@example.com", "").is_err());
        assert!(validate_credentials("   ", "hunter2").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_reorder_level() {
        assert!(validate_reorder_level(0).is_ok());
        assert!(validate_reorder_level(10).is_ok());
        assert!(validate_reorder_level(-5).is_err());
    }
}
