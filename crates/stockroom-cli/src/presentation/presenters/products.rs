use stockroom_engine::StockLevel;
use stockroom_types::Product;

use crate::presentation::formatters::CurrencyFormatter;
use crate::presentation::view_models::{ProductRowViewModel, ProductTableViewModel};

pub fn present_product_row(product: &Product, currency: &CurrencyFormatter) -> ProductRowViewModel {
    ProductRowViewModel {
        id: product.id.get(),
        name: product.name.clone(),
        sku: product.sku.clone(),
        category: product.category.clone(),
        quantity: product.quantity,
        stock_level: StockLevel::of(product.quantity).into(),
        price: currency.format(product.price),
    }
}

/// Build the product table from already-filtered rows.
///
/// `selected` is clamped to the row count; an empty table has no selection.
pub fn present_product_table(
    rows: &[&Product],
    total_products: usize,
    search: &str,
    selected: usize,
    currency: &CurrencyFormatter,
) -> ProductTableViewModel {
    let rows: Vec<ProductRowViewModel> = rows
        .iter()
        .map(|product| present_product_row(product, currency))
        .collect();

    let selected = if rows.is_empty() {
        None
    } else {
        Some(selected.min(rows.len() - 1))
    };

    ProductTableViewModel {
        rows,
        selected,
        search: search.to_string(),
        total_products,
    }
}
