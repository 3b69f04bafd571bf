use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid storefront config: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_brand_name() -> String {
    "Maison".to_string()
}

fn default_true() -> bool {
    true
}

/// Storefront settings, read from `storefront.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Shown in the header and footer
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    /// Whether product cards show the wishlist heart overlay
    #[serde(default = "default_true")]
    pub show_wishlist_on_cards: bool,
    /// Optional catalog override as a JSON array of products.
    /// None = built-in demo catalog.
    #[serde(default)]
    pub catalog_json: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            show_wishlist_on_cards: true,
            catalog_json: None,
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse `json`, falling back to defaults if it is malformed
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}, using defaults");
                Self::default()
            }
        }
    }
}
