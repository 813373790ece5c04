//! Server-side product catalog
//!
//! Products come from a JSON file named by `CATALOG_PATH` or, when that is
//! not configured or unusable, from the built-in single-product catalog.

use std::path::Path;
use std::sync::Arc;

use super::product::Product;

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no products")]
    Empty,
}

/// Shared, immutable product list
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// Built-in catalog with the BIODANCE mask
    pub fn builtin() -> Self {
        Self::new(vec![
            Product::new(
                "biodance-bio-collagen-real-deep-mask",
                "BIODANCE Bio-Collagen Real Deep Mask",
                "biodance-bio-collagen-real-deep-mask",
                23.99,
            )
            .with_compare_at_price(35.99)
            .with_image("/hero-product.jpg"),
        ])
    }

    /// Parse a catalog from a JSON array of products
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self::new(products))
    }

    /// Load a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from an optional path, falling back to the built-in catalog
    pub fn load_or_builtin(path: Option<&str>) -> Self {
        let Some(path) = path else {
            tracing::info!("No CATALOG_PATH configured, using built-in catalog");
            return Self::builtin();
        };

        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!("Loaded {} products from {}", catalog.len(), path);
                catalog
            }
            Err(e) => {
                tracing::warn!("Could not load catalog from {}: {}. Using built-in catalog", path, e);
                Self::builtin()
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::product::resolve_target_product;

    #[test]
    fn test_builtin_catalog_has_target_product() {
        let catalog = Catalog::builtin();
        let target = resolve_target_product(catalog.products());
        assert!(target.is_some());
        assert_eq!(target.unwrap().discount_percent(), Some(33));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "1", "title": "Toner", "slug": "toner", "price": 12.0},
            {"id": "2", "title": "BIODANCE Mask", "slug": "mask", "price": 20.0, "compare_at_price": 30.0}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1].compare_at_price, Some(30.0));
    }

    #[test]
    fn test_from_json_rejects_empty_list() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/definitely/not/here/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(err.to_string().starts_with("Failed to read catalog file"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "biodance-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[{"id": "1", "title": "BIODANCE Mask", "slug": "mask", "price": 9.5}]"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].price, 9.5);
    }

    #[test]
    fn test_load_or_builtin_falls_back() {
        let catalog = Catalog::load_or_builtin(Some("/definitely/not/here/catalog.json"));
        assert_eq!(catalog.len(), Catalog::builtin().len());

        let catalog = Catalog::load_or_builtin(None);
        assert!(!catalog.is_empty());
    }
}
