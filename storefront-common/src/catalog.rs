//! Product lookup
//!
//! Pages depend on [`ProductCatalog`] rather than on a concrete table, so a
//! real data source can replace [`MockCatalog`] without touching rendering.

use crate::product::{Category, Product};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    NotFound(String),
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only access to products
pub trait ProductCatalog {
    /// Look up a single product by id
    fn get(&self, id: &str) -> Result<Product, CatalogError>;

    /// All products, optionally narrowed to one category, in catalog order
    fn list(&self, category: Option<Category>) -> Vec<Product>;
}

/// In-memory catalog backed by a fixed product list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockCatalog {
    products: Vec<Product>,
}

const IMG_1: &str = "https://api.builder.io/api/v1/image/assets/TEMP/6714f073aacab712b21f60fbf4e61031c285fc0d?width=841";
const IMG_2: &str = "https://api.builder.io/api/v1/image/assets/TEMP/0efc5ea89a5ee8e0294affd324731a2314beb84b?width=841";
const IMG_3: &str = "https://api.builder.io/api/v1/image/assets/TEMP/bdbf39600435e40a6f9b6e8648985bdc886f117b?width=841";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn standard_details() -> Vec<String> {
    strings(&[
        "Premium fabric composition",
        "Hand-finished details",
        "Made in India",
        "Dry clean only",
    ])
}

impl MockCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo catalog shipped with the storefront
    pub fn builtin() -> Self {
        Self::new(vec![
            Product {
                id: "1".to_string(),
                title: "SIGNATURE Collection Piece 1".to_string(),
                price: "120000/-".to_string(),
                description: "Exquisite craftsmanship meets timeless elegance in this signature piece from our premium collection.".to_string(),
                images: strings(&[IMG_1, IMG_2, IMG_3]),
                sizes: strings(&["XS", "S", "M", "L", "XL"]),
                colors: strings(&["Black", "White", "Navy"]),
                details: standard_details(),
                category: Some(Category::Signature),
            },
            Product {
                id: "2".to_string(),
                title: "SIGNATURE Collection Piece 2".to_string(),
                price: "120000/-".to_string(),
                description: "A masterpiece that embodies sophistication and luxury in every thread.".to_string(),
                images: strings(&[IMG_2, IMG_1]),
                sizes: strings(&["XS", "S", "M", "L", "XL"]),
                colors: strings(&["Black", "White", "Navy"]),
                details: standard_details(),
                category: Some(Category::Signature),
            },
        ])
    }

    /// Load a catalog from a JSON array of products
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for MockCatalog {
    fn get(&self, id: &str) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| {
                debug!("Catalog miss for product id {id:?}");
                CatalogError::NotFound(id.to_string())
            })
    }

    fn list(&self, category: Option<Category>) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| category.is_none() || p.category == category)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_products_resolve() {
        let catalog = MockCatalog::builtin();
        let first = catalog.get("1").unwrap();
        assert_eq!(first.title, "SIGNATURE Collection Piece 1");
        assert_eq!(first.price, "120000/-");
        assert_eq!(first.images.len(), 3);
        assert_eq!(first.sizes, vec!["XS", "S", "M", "L", "XL"]);
        assert_eq!(first.colors, vec!["Black", "White", "Navy"]);
        assert_eq!(first.details.len(), 4);

        let second = catalog.get("2").unwrap();
        assert_eq!(second.images, vec![IMG_2.to_string(), IMG_1.to_string()]);
    }

    #[test]
    fn test_missing_product() {
        let catalog = MockCatalog::builtin();
        match catalog.get("999") {
            Err(CatalogError::NotFound(id)) => assert_eq!(id, "999"),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(catalog.get("").is_err());
    }

    #[test]
    fn test_list_filters_by_category() {
        let catalog = MockCatalog::builtin();
        assert_eq!(catalog.list(None).len(), 2);
        assert_eq!(catalog.list(Some(Category::Signature)).len(), 2);
        assert!(catalog.list(Some(Category::Bridal)).is_empty());
    }

    #[test]
    fn test_list_preserves_order() {
        let ids: Vec<String> = MockCatalog::builtin()
            .list(None)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": "b-1",
                "title": "Bridal Lehenga",
                "price": "250000/-",
                "images": ["a.jpg"],
                "sizes": ["M"],
                "colors": ["Ivory"],
                "category": "bridal"
            }
        ]"#;
        let catalog = MockCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let product = catalog.get("b-1").unwrap();
        assert_eq!(product.category, Some(Category::Bridal));
        assert!(product.details.is_empty());
        assert!(product.description.is_empty());
        assert_eq!(catalog.list(Some(Category::Bridal)).len(), 1);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = MockCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
