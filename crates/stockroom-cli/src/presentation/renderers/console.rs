use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};
use stockroom_types::Product;

pub struct ConsoleRenderer {
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colour on when stdout is a terminal
    pub fn detect() -> Self {
        Self::new(io::stdout().is_terminal())
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn plain(&self, view: impl Display) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", view)?;
        stdout.flush()?;
        Ok(())
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn csv(&self, products: &[&Product]) -> Result<()> {
        write_csv(io::stdout().lock(), products)
    }
}

/// One header row, then one row per product with raw, unscaled prices
pub fn write_csv<W: Write>(writer: W, products: &[&Product]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["id", "name", "sku", "category", "quantity", "price", "image_url"])?;
    for product in products {
        wtr.write_record([
            product.id.to_string(),
            product.name.clone(),
            product.sku.clone(),
            product.category.clone(),
            product.quantity.to_string(),
            product.price.to_string(),
            product.image_url.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_testing::sample_catalog;

    #[test]
    fn test_csv_quotes_and_raw_prices() -> Result<()> {
        let products = sample_catalog();
        let rows: Vec<&Product> = products.iter().take(2).collect();
        let mut out = Vec::new();

        write_csv(&mut out, &rows)?;

        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,name,sku,category,quantity,price,image_url");
        assert!(lines[1].starts_with("1,\"Laptop Pro 15\"\"\",LP15-2024,Electronics,45,1000,"));
        assert!(lines[2].starts_with("2,Wireless Mouse,WM-001,Accessories,120,25.5,"));
        Ok(())
    }

    #[test]
    fn test_csv_empty_has_header_only() -> Result<()> {
        let mut out = Vec::new();
        write_csv(&mut out, &[])?;
        assert_eq!(
            String::from_utf8(out)?,
            "id,name,sku,category,quantity,price,image_url\n"
        );
        Ok(())
    }
}
