use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Result;

/// Identifier of a product, unique within a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Largest price a product may carry, in the unscaled unit
pub const MAX_PRICE: f64 = 1_000_000_000.0;

/// One inventory item.
///
/// `quantity` and `price` are caller-supplied; nothing here derives them.
/// `price` is stored in the original, unscaled currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub image_url: String,
}

impl Product {
    /// Attach an identifier to a draft
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            sku: draft.sku,
            category: draft.category,
            quantity: draft.quantity,
            price: draft.price,
            image_url: draft.image_url,
        }
    }

    /// Copy of the editable fields, without the identifier
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            sku: self.sku.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            price: self.price,
            image_url: self.image_url.clone(),
        }
    }

    /// quantity × price, in the unscaled unit
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    /// Parse a JSON array of products (seed catalog format)
    pub fn list_from_json(json: &str) -> Result<Vec<Product>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A product record that has not been assigned an identifier yet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(7),
            name: "Wireless Mouse".to_string(),
            sku: "WM-001".to_string(),
            category: "Accessories".to_string(),
            quantity: 4,
            price: 2.5,
            image_url: "https://example.test/mouse.png".to_string(),
        }
    }

    #[test]
    fn test_draft_round_trip_keeps_id_outside() {
        let product = sample();
        let draft = product.to_draft();
        assert_eq!(draft.name, "Wireless Mouse");

        let restored = Product::from_draft(product.id, draft);
        assert_eq!(restored, product);
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(sample().stock_value(), 10.0);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["imageUrl"], "https://example.test/mouse.png");
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_list_from_json() {
        let json = r#"[
            {"id": 1, "name": "Desk", "sku": "SD-1", "category": "Furniture",
             "quantity": 8, "price": 450.0, "imageUrl": "u"}
        ]"#;
        let products = Product::list_from_json(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::new(1));
        assert_eq!(products[0].quantity, 8);
    }

    #[test]
    fn test_list_from_json_rejects_negative_quantity() {
        let json = r#"[{"id": 1, "name": "Desk", "sku": "SD-1", "category": "F",
                        "quantity": -1, "price": 1.0, "imageUrl": "u"}]"#;
        assert!(Product::list_from_json(json).is_err());
    }
}
