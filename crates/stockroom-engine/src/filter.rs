use stockroom_types::Product;

/// Case-insensitive substring match of `criterion` against name, SKU and category.
///
/// An empty criterion matches every product.
pub fn matches(product: &Product, criterion: &str) -> bool {
    let needle = criterion.to_lowercase();
    matches_lowered(product, &needle)
}

/// Products matching `criterion`, in their original relative order.
pub fn filter_products<'a>(products: &'a [Product], criterion: &str) -> Vec<&'a Product> {
    let needle = criterion.to_lowercase();
    products
        .iter()
        .filter(|product| matches_lowered(product, &needle))
        .collect()
}

fn matches_lowered(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    product.name.to_lowercase().contains(needle)
        || product.sku.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}
