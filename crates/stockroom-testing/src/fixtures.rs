//! Product fixtures.
//!
//! `sample_catalog()` is a small catalog with round numbers so expected
//! metrics can be worked out by hand:
//!
//! | id | category    | qty | price  | value  |
//! |----|-------------|-----|--------|--------|
//! | 1  | Electronics | 45  | 1000.0 | 45000  |
//! | 2  | Accessories | 120 | 25.5   | 3060   |
//! | 3  | Furniture   | 8   | 450.0  | 3600   |
//! | 4  | Accessories | 9   | 50.0   | 450    |
//!
//! Total value 52110, two low-stock products (3, 4), three categories.

use anyhow::Result;
use std::fs;
use std::path::Path;
use stockroom_types::{Product, ProductDraft, ProductId};

/// Fluent builder for test products.
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            product: Product {
                id: ProductId::new(id),
                name: format!("Product {}", id),
                sku: format!("SKU-{}", id),
                category: "General".to_string(),
                quantity: 1,
                price: 1.0,
                image_url: format!("https://picsum.photos/seed/{}/400/400", id),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.product.name = name.to_string();
        self
    }

    pub fn sku(mut self, sku: &str) -> Self {
        self.product.sku = sku.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.product.category = category.to_string();
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.product.quantity = quantity;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.product.price = price;
        self
    }

    pub fn build(self) -> Product {
        self.product
    }

    pub fn draft(self) -> ProductDraft {
        self.product.to_draft()
    }
}

pub fn sample_catalog() -> Vec<Product> {
    vec![
        ProductBuilder::new(1)
            .name("Laptop Pro 15\"")
            .sku("LP15-2024")
            .category("Electronics")
            .quantity(45)
            .price(1000.0)
            .build(),
        ProductBuilder::new(2)
            .name("Wireless Mouse")
            .sku("WM-001")
            .category("Accessories")
            .quantity(120)
            .price(25.5)
            .build(),
        ProductBuilder::new(3)
            .name("Standing Desk")
            .sku("SD-WD-48")
            .category("Furniture")
            .quantity(8)
            .price(450.0)
            .build(),
        ProductBuilder::new(4)
            .name("USB-C Hub")
            .sku("UCH-8P-GRY")
            .category("Accessories")
            .quantity(9)
            .price(50.0)
            .build(),
    ]
}

/// Write products as a JSON seed catalog.
pub fn write_catalog(path: &Path, products: &[Product]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(products)?)?;
    Ok(())
}
