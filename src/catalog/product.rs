//! Product Module
//!
//! The catalog's only entity and its field constraints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, FieldError, Result};

// == Constraint Constants ==
/// Inclusive price bounds
pub const MIN_PRICE: Decimal = Decimal::ONE;
pub const MAX_PRICE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Inclusive brand length bounds, in characters
pub const MIN_BRAND_LENGTH: usize = 3;
pub const MAX_BRAND_LENGTH: usize = 60;

// == Product ==
/// A catalog record. `id` is assigned by the data store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub price: Decimal,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl Product {
    /// Returns every violated constraint, empty when the product is valid.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.price < MIN_PRICE || self.price > MAX_PRICE {
            errors.push(FieldError::new(
                "price",
                format!("The field Price must be between {MIN_PRICE} and {MAX_PRICE}."),
            ));
        }

        match self.brand.as_deref() {
            None => errors.push(FieldError::new("brand", "The Brand field is required.")),
            Some(brand) if brand.trim().is_empty() => {
                errors.push(FieldError::new("brand", "The Brand field is required."))
            }
            Some(brand) => {
                let len = brand.chars().count();
                if !(MIN_BRAND_LENGTH..=MAX_BRAND_LENGTH).contains(&len) {
                    errors.push(FieldError::new(
                        "brand",
                        format!(
                            "The field Brand must be a string with a minimum length of \
                             {MIN_BRAND_LENGTH} and a maximum length of {MAX_BRAND_LENGTH}."
                        ),
                    ));
                }
            }
        }

        errors
    }

    /// Checks constraints, failing with every violation at once.
    pub fn validate(&self) -> Result<()> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::ValidationFailed(errors))
        }
    }
}
