use std::fmt;

use super::{heading, paint};
use crate::presentation::formatters::truncate;
use crate::presentation::view_models::ProductTableViewModel;

const NAME_WIDTH: usize = 28;
const SKU_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 12;

pub struct ProductListView<'a> {
    data: &'a ProductTableViewModel,
    color: bool,
}

impl<'a> ProductListView<'a> {
    pub fn new(data: &'a ProductTableViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for ProductListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.rows.is_empty() {
            return writeln!(f, "No products found");
        }

        let header = format!(
            "{:<5}{:<name$}  {:<sku$}  {:<cat$}  {:>5}  {}",
            "ID",
            "NAME",
            "SKU",
            "CATEGORY",
            "QTY",
            "PRICE",
            name = NAME_WIDTH,
            sku = SKU_WIDTH,
            cat = CATEGORY_WIDTH,
        );
        writeln!(f, "{}", heading(&header, self.color))?;

        for row in &self.data.rows {
            let quantity = format!("{:>5}", row.quantity);
            writeln!(
                f,
                "{:<5}{:<name$}  {:<sku$}  {:<cat$}  {}  {}",
                row.id,
                truncate(&row.name, NAME_WIDTH),
                truncate(&row.sku, SKU_WIDTH),
                truncate(&row.category, CATEGORY_WIDTH),
                paint(&quantity, row.stock_level, self.color),
                row.price,
                name = NAME_WIDTH,
                sku = SKU_WIDTH,
                cat = CATEGORY_WIDTH,
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} of {} products",
            self.data.rows.len(),
            self.data.total_products
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::formatters::CurrencyFormatter;
    use crate::presentation::presenters::present_product_table;
    use stockroom_engine::filter_products;
    use stockroom_testing::sample_catalog;

    fn render(search: &str) -> String {
        let products = sample_catalog();
        let rows = filter_products(&products, search);
        let vm = present_product_table(&rows, products.len(), search, 0, &CurrencyFormatter::default());
        ProductListView::new(&vm, false).to_string()
    }

    #[test]
    fn test_filtered_listing() {
        let output = render("desk");

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("ID   NAME"));
        assert!(lines[1].starts_with("3    Standing Desk"));
        assert!(lines[1].ends_with("    8  11.250.000 ₫"));
        assert_eq!(lines.last(), Some(&"1 of 4 products"));
    }

    #[test]
    fn test_empty_result() {
        assert_eq!(render("no such thing"), "No products found\n");
    }
}
