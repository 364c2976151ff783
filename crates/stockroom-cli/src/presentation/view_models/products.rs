use super::common::StatusLevel;

#[derive(Debug, Clone)]
pub struct ProductTableViewModel {
    pub rows: Vec<ProductRowViewModel>,
    /// Index into `rows`; `None` when there are no rows
    pub selected: Option<usize>,
    pub search: String,
    pub total_products: usize,
}

#[derive(Debug, Clone)]
pub struct ProductRowViewModel {
    pub id: u64,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub stock_level: StatusLevel,
    pub price: String,
}
