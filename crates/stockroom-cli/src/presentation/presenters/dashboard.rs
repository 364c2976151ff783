use stockroom_engine::InventoryMetrics;

use crate::presentation::formatters::CurrencyFormatter;
use crate::presentation::view_models::{
    CategoryBarViewModel, DashboardViewModel, MetricCardViewModel, StatusLevel,
};

pub fn present_dashboard(
    metrics: &InventoryMetrics,
    currency: &CurrencyFormatter,
) -> DashboardViewModel {
    let low_stock_level = if metrics.low_stock_count > 0 {
        StatusLevel::Error
    } else {
        StatusLevel::Success
    };

    let cards = vec![
        MetricCardViewModel {
            title: "Total products".to_string(),
            value: metrics.total_products.to_string(),
            level: StatusLevel::Info,
        },
        MetricCardViewModel {
            title: "Stock value".to_string(),
            value: currency.format(metrics.total_stock_value),
            level: StatusLevel::Success,
        },
        MetricCardViewModel {
            title: "Low stock".to_string(),
            value: metrics.low_stock_count.to_string(),
            level: low_stock_level,
        },
        MetricCardViewModel {
            title: "Categories".to_string(),
            value: metrics.distinct_categories.to_string(),
            level: StatusLevel::Info,
        },
    ];

    let max = metrics
        .category_quantities
        .iter()
        .map(|c| c.quantity)
        .max()
        .unwrap_or(0);

    let categories = metrics
        .category_quantities
        .iter()
        .map(|c| CategoryBarViewModel {
            name: c.name.clone(),
            quantity: c.quantity,
            fill: if max == 0 {
                0.0
            } else {
                c.quantity as f64 / max as f64
            },
        })
        .collect();

    DashboardViewModel { cards, categories }
}
