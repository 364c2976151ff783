//! Seed catalog the store starts from.

use std::path::Path;
use stockroom_types::{MAX_PRICE, Product, ProductId};
use tracing::info;

use crate::config::CatalogConfig;
use crate::{Error, Result};

fn seed(
    id: u64,
    slug: &str,
    name: &str,
    sku: &str,
    category: &str,
    quantity: u32,
    price: f64,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        quantity,
        price,
        image_url: format!("https://picsum.photos/seed/{}/400/400", slug),
    }
}

/// The eight products the application ships with
pub fn builtin_catalog() -> Vec<Product> {
    vec![
        seed(1, "laptop", "Laptop Pro 15\"", "LP15-2024", "Electronics", 45, 1499.99),
        seed(2, "mouse", "Wireless Mouse", "WM-001", "Accessories", 120, 25.50),
        seed(3, "keyboard", "Mechanical Keyboard", "MK-RGB-02", "Accessories", 75, 89.99),
        seed(4, "monitor", "4K Monitor 27\"", "4KM-27-X", "Monitors", 30, 399.00),
        seed(5, "chair", "Ergonomic Office Chair", "EOC-BLK-LG", "Furniture", 15, 250.00),
        seed(6, "hub", "USB-C Hub", "UCH-8P-GRY", "Accessories", 250, 49.95),
        seed(7, "headphones", "Noise-Cancelling Headphones", "NCH-PRO-WHT", "Audio", 88, 199.99),
        seed(8, "desk", "Standing Desk", "SD-WD-48", "Furniture", 8, 450.00),
    ]
}

/// Resolve the starting collection.
///
/// Priority: explicit `override_path`, then `catalog.seed_file`, then the
/// built-in catalog. `catalog.start_empty` wins over everything.
pub fn load_catalog(config: &CatalogConfig, override_path: Option<&Path>) -> Result<Vec<Product>> {
    if config.start_empty {
        info!("starting with an empty catalog");
        return Ok(Vec::new());
    }

    let path = override_path.or(config.seed_file.as_deref());
    let Some(path) = path else {
        return Ok(builtin_catalog());
    };

    let products = read_catalog_file(path)?;
    info!(path = %path.display(), count = products.len(), "loaded seed catalog");
    Ok(products)
}

fn read_catalog_file(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)?;
    let products = Product::list_from_json(&content).map_err(|source| Error::Catalog {
        path: path.to_path_buf(),
        source,
    })?;

    if products.iter().any(|p| p.id.get() == u64::MAX) {
        return Err(Error::Config(format!(
            "catalog {} uses product id {}, which leaves no id for new products",
            path.display(),
            u64::MAX
        )));
    }

    if let Some(product) = products
        .iter()
        .find(|p| !(0.0..=MAX_PRICE).contains(&p.price))
    {
        return Err(Error::Config(format!(
            "catalog {} gives product {} a price of {}; prices must be between 0 and {}",
            path.display(),
            product.id,
            product.price,
            MAX_PRICE
        )));
    }

    let mut ids: Vec<u64> = products.iter().map(|p| p.id.get()).collect();
    ids.sort_unstable();
    if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(Error::Config(format!(
            "catalog {} contains duplicate product id {}",
            path.display(),
            pair[0]
        )));
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_engine::summarize;
    use stockroom_testing::fixtures::write_catalog;
    use stockroom_testing::{ProductBuilder, sample_catalog};
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_shape() {
        let products = builtin_catalog();
        assert_eq!(products.len(), 8);

        let metrics = summarize(&products);
        assert_eq!(metrics.low_stock_count, 1);
        assert_eq!(metrics.distinct_categories, 5);
        assert_eq!(products[7].image_url, "https://picsum.photos/seed/desk/400/400");
    }

    #[test]
    fn test_default_is_builtin() -> Result<()> {
        let products = load_catalog(&CatalogConfig::default(), None)?;
        assert_eq!(products, builtin_catalog());
        Ok(())
    }

    #[test]
    fn test_start_empty() -> Result<()> {
        let config = CatalogConfig {
            start_empty: true,
            ..CatalogConfig::default()
        };
        assert!(load_catalog(&config, None)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_override_path_beats_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let from_config = temp_dir.path().join("config.json");
        let from_flag = temp_dir.path().join("flag.json");
        write_catalog(&from_config, &sample_catalog()).unwrap();
        write_catalog(&from_flag, &sample_catalog()[..1]).unwrap();

        let config = CatalogConfig {
            seed_file: Some(from_config.clone()),
            ..CatalogConfig::default()
        };

        assert_eq!(load_catalog(&config, None)?.len(), 4);
        assert_eq!(load_catalog(&config, Some(&from_flag))?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_a_catalog_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json")?;

        let err = load_catalog(&CatalogConfig::default(), Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Catalog { .. }));
        Ok(())
    }

    #[test]
    fn test_duplicate_ids_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("dupes.json");
        let products = vec![ProductBuilder::new(3).build(), ProductBuilder::new(3).build()];
        write_catalog(&path, &products).unwrap();

        let err = load_catalog(&CatalogConfig::default(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("duplicate product id 3"));
        Ok(())
    }

    #[test]
    fn test_out_of_range_price_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("pricey.json");
        let products = vec![
            ProductBuilder::new(1).build(),
            ProductBuilder::new(2).price(1e300).build(),
        ];
        write_catalog(&path, &products).unwrap();

        let err = load_catalog(&CatalogConfig::default(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("product 2"));
        Ok(())
    }

    #[test]
    fn test_max_id_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("max.json");
        write_catalog(&path, &[ProductBuilder::new(u64::MAX).build()]).unwrap();

        let err = load_catalog(&CatalogConfig::default(), Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("18446744073709551615"));
        Ok(())
    }
}
