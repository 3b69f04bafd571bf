//! Product catalog entries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Collection a product belongs to. Used by the `?category=` filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Signature,
    Bridal,
    Contemporary,
    Luxury,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Signature,
        Category::Bridal,
        Category::Contemporary,
        Category::Luxury,
    ];

    /// Query-string value for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Signature => "signature",
            Category::Bridal => "bridal",
            Category::Contemporary => "contemporary",
            Category::Luxury => "luxury",
        }
    }

    /// Heading shown on the collection page
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Signature => "Signature Collection",
            Category::Bridal => "Bridal Couture",
            Category::Contemporary => "Contemporary Drapes",
            Category::Luxury => "Luxury Fusion Lounge",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A catalog entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Price as a display label, e.g. "120000/-"
    pub price: String,
    #[serde(default)]
    pub description: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Product {
    /// First image, used for cards and as the gallery default
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Thumbnails are only worth showing when there is something to switch to
    pub fn has_gallery(&self) -> bool {
        self.images.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_query_value() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("Bridal".parse::<Category>(), Ok(Category::Bridal));
    }

    #[test]
    fn test_unknown_category() {
        let err = "casual".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("casual".to_string()));
        assert_eq!(err.to_string(), "unknown category: casual");
    }

    #[test]
    fn test_gallery_needs_more_than_one_image() {
        let mut product = Product {
            id: "p".into(),
            title: "Piece".into(),
            price: "1/-".into(),
            description: String::new(),
            images: vec!["a.jpg".into()],
            sizes: vec![],
            colors: vec![],
            details: vec![],
            category: None,
        };
        assert!(!product.has_gallery());
        assert_eq!(product.cover_image(), Some("a.jpg"));

        product.images.push("b.jpg".into());
        assert!(product.has_gallery());
        assert_eq!(product.image(1), Some("b.jpg"));
        assert_eq!(product.image(2), None);
    }
}
