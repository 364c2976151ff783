use super::common::StatusLevel;

#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub cards: Vec<MetricCardViewModel>,
    pub categories: Vec<CategoryBarViewModel>,
}

#[derive(Debug, Clone)]
pub struct MetricCardViewModel {
    pub title: String,
    pub value: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone)]
pub struct CategoryBarViewModel {
    pub name: String,
    pub quantity: u64,
    /// Bar length relative to the largest category, 0.0..=1.0
    pub fill: f64,
}
