// Engine module - derived views over the product collection (search, metrics)
// This layer sits between the record types and the runtime/presentation layers.
// Everything here is a pure function of a collection snapshot.

pub mod filter;
pub mod metrics;

pub use filter::{filter_products, matches};
pub use metrics::{
    CategoryQuantity, InventoryMetrics, LOW_STOCK_THRESHOLD, MEDIUM_STOCK_THRESHOLD, StockLevel,
    category_quantities, summarize,
};
