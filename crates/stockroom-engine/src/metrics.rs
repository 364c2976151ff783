use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stockroom_types::Product;

/// Products with fewer units than this are low on stock
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Below this (and at or above the low threshold) stock is merely "medium"
pub const MEDIUM_STOCK_THRESHOLD: u32 = 50;

/// Dashboard statistics over the full, unfiltered collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryMetrics {
    pub total_products: usize,
    pub total_stock_value: f64,
    pub low_stock_count: usize,
    pub distinct_categories: usize,
    pub category_quantities: Vec<CategoryQuantity>,
}

/// Summed quantity of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuantity {
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Low,
    Medium,
    Healthy,
}

impl StockLevel {
    pub fn of(quantity: u32) -> Self {
        if quantity < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else if quantity < MEDIUM_STOCK_THRESHOLD {
            StockLevel::Medium
        } else {
            StockLevel::Healthy
        }
    }
}

pub fn summarize(products: &[Product]) -> InventoryMetrics {
    let mut total_stock_value = 0.0;
    let mut low_stock_count = 0;

    for product in products {
        total_stock_value += product.stock_value();
        if product.quantity < LOW_STOCK_THRESHOLD {
            low_stock_count += 1;
        }
    }

    let distinct_categories = products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<HashSet<_>>()
        .len();

    InventoryMetrics {
        total_products: products.len(),
        total_stock_value,
        low_stock_count,
        distinct_categories,
        category_quantities: category_quantities(products),
    }
}

/// Quantity per category, in the order each category is first seen
pub fn category_quantities(products: &[Product]) -> Vec<CategoryQuantity> {
    let mut breakdown: Vec<CategoryQuantity> = Vec::new();

    for product in products {
        match breakdown.iter_mut().find(|c| c.name == product.category) {
            Some(existing) => existing.quantity += u64::from(product.quantity),
            None => breakdown.push(CategoryQuantity {
                name: product.category.clone(),
                quantity: u64::from(product.quantity),
            }),
        }
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_types::ProductId;

    fn product(id: u64, category: &str, quantity: u32, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            sku: format!("SKU-{}", id),
            category: category.to_string(),
            quantity,
            price,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_empty_collection() {
        let metrics = summarize(&[]);
        assert_eq!(metrics.total_products, 0);
        assert_eq!(metrics.total_stock_value, 0.0);
        assert_eq!(metrics.low_stock_count, 0);
        assert_eq!(metrics.distinct_categories, 0);
        assert!(metrics.category_quantities.is_empty());
    }

    #[test]
    fn test_value_and_low_stock_scenario() {
        let products = vec![product(1, "A", 5, 10.0), product(2, "A", 20, 2.0)];
        let metrics = summarize(&products);
        assert_eq!(metrics.total_stock_value, 90.0);
        assert_eq!(metrics.low_stock_count, 1);
    }

    #[test]
    fn test_low_stock_boundary() {
        let products = vec![
            product(1, "A", 9, 1.0),
            product(2, "A", 10, 1.0),
            product(3, "A", 0, 1.0),
        ];
        assert_eq!(summarize(&products).low_stock_count, 2);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let products = vec![
            product(1, "Furniture", 15, 1.0),
            product(2, "Audio", 3, 1.0),
            product(3, "Furniture", 8, 1.0),
        ];
        let metrics = summarize(&products);
        assert_eq!(metrics.distinct_categories, 2);
        assert_eq!(
            metrics.category_quantities,
            vec![
                CategoryQuantity {
                    name: "Furniture".to_string(),
                    quantity: 23
                },
                CategoryQuantity {
                    name: "Audio".to_string(),
                    quantity: 3
                },
            ]
        );
    }

    #[test]
    fn test_category_labels_are_case_sensitive() {
        let products = vec![product(1, "audio", 1, 1.0), product(2, "Audio", 1, 1.0)];
        assert_eq!(summarize(&products).distinct_categories, 2);
    }

    #[test]
    fn test_stock_level_tiers() {
        assert_eq!(StockLevel::of(0), StockLevel::Low);
        assert_eq!(StockLevel::of(9), StockLevel::Low);
        assert_eq!(StockLevel::of(10), StockLevel::Medium);
        assert_eq!(StockLevel::of(49), StockLevel::Medium);
        assert_eq!(StockLevel::of(50), StockLevel::Healthy);
    }
}
