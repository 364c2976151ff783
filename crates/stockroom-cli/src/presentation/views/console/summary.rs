use std::fmt;

use super::{heading, paint};
use crate::presentation::view_models::DashboardViewModel;

pub struct SummaryView<'a> {
    data: &'a DashboardViewModel,
    color: bool,
}

impl<'a> SummaryView<'a> {
    pub fn new(data: &'a DashboardViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for SummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", heading("Inventory summary", self.color))?;
        for card in &self.data.cards {
            writeln!(
                f,
                "  {:<16}{}",
                card.title,
                paint(&card.value, card.level, self.color)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", heading("Quantity by category", self.color))?;
        if self.data.categories.is_empty() {
            writeln!(f, "  (no products)")?;
            return Ok(());
        }

        let width = self
            .data
            .categories
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(14);
        for category in &self.data.categories {
            writeln!(
                f,
                "  {:<width$}{:>8}",
                category.name,
                category.quantity,
                width = width
            )?;
        }

        Ok(())
    }
}
