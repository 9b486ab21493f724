//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::catalog::Product;

/// Request body for POST /products and PUT /products/:id
///
/// `price` accepts a JSON number or a decimal string; a missing price
/// reads as zero and fails validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    /// Ignored on create; must match the path id on update
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductRequest {
    /// Builds the product to create; any client-supplied id is dropped.
    pub fn into_new_product(self) -> Product {
        self.into_product(0)
    }

    /// Builds the product to update, keeping the payload id (0 if absent).
    pub fn into_update(self) -> Product {
        let id = self.id.unwrap_or_default();
        self.into_product(id)
    }

    fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            brand: self.brand,
            image: self.image,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_numeric_and_string_price() {
        let numeric: ProductRequest =
            serde_json::from_str(r#"{"price": 19.99, "brand": "Acme"}"#).unwrap();
        let text: ProductRequest =
            serde_json::from_str(r#"{"price": "19.99", "brand": "Acme"}"#).unwrap();

        assert_eq!(numeric.price, Decimal::new(1999, 2));
        assert_eq!(text.price, Decimal::new(1999, 2));
    }

    #[test]
    fn test_missing_fields_default() {
        let req: ProductRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.price, Decimal::ZERO);
        assert!(req.brand.is_none());
        assert!(req.into_new_product().validate().is_err());
    }

    #[test]
    fn test_create_drops_client_id() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"id": 99, "price": 5, "brand": "Acme"}"#).unwrap();
        assert_eq!(req.into_new_product().id, 0);
    }

    #[test]
    fn test_update_keeps_payload_id() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"id": 4, "price": 5, "brand": "Acme"}"#).unwrap();
        assert_eq!(req.into_update().id, 4);
    }
}
