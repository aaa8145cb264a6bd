//! # Validation Module
//!
//! Validation for catalog records and values read back from storage.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Catalog::new(records)                                                 │
//! │  └── validate_artwork() for every record, then duplicate-id check      │
//! │                                                                         │
//! │  CartStore::open() (atelier-store)                                     │
//! │  └── validate_artwork() + validate_quantity() per persisted line       │
//! │                                                                         │
//! │  Store operations never validate: a duplicate add or a missing         │
//! │  remove is a normal interaction, not an error.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atelier_core::validation::{validate_artwork_id, validate_quantity};
//!
//! assert!(validate_artwork_id("desert-bloom").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Artwork;
use crate::{MAX_ARTWORK_ID_LEN, MAX_LINE_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an artwork id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Only letters, digits, hyphens and underscores
pub fn validate_artwork_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_ARTWORK_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ARTWORK_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates the default-language title. Localized titles may be empty.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price: 0 through [`MAX_PRICE_CENTS`].
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }
    Ok(())
}

/// Validates a line quantity: 1 through [`MAX_LINE_QUANTITY`].
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 || qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY as i64,
        });
    }
    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates one catalog record.
pub fn validate_artwork(artwork: &Artwork) -> ValidationResult<()> {
    validate_artwork_id(&artwork.id)?;
    validate_title(&artwork.title)?;
    validate_price(artwork.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::artwork;
    use crate::types::Category;

    #[test]
    fn test_validate_artwork_id() {
        assert!(validate_artwork_id("a1").is_ok());
        assert!(validate_artwork_id("silk_road-02").is_ok());
        assert!(matches!(
            validate_artwork_id(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_artwork_id("has space"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_artwork_id(&"x".repeat(65)),
            Err(ValidationError::TooLong { max: 64, .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(12000)).is_ok());
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
        assert!(matches!(
            validate_price(Money::from_cents(i64::MAX)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_LINE_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(MAX_LINE_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_artwork() {
        let good = artwork("a1", "Desert Bloom", Category::Oil, 12000);
        assert!(validate_artwork(&good).is_ok());

        let mut untitled = good.clone();
        untitled.title = "   ".to_string();
        assert!(matches!(
            validate_artwork(&untitled),
            Err(ValidationError::Required { ref field }) if field == "title"
        ));

        let mut negative = good;
        negative.price = Money::from_cents(-100);
        assert!(validate_artwork(&negative).is_err());
    }
}
