//! Catalog selection for the running app

use std::rc::Rc;
use storefront_common::{MockCatalog, ProductCatalog, StorefrontConfig};
use tracing::{info, warn};

/// Catalog handle provided through context. Pages only see the trait.
pub type SharedCatalog = Rc<dyn ProductCatalog>;

/// Build the catalog named by the config, falling back to the built-in one
pub fn from_config(config: &StorefrontConfig) -> Rc<MockCatalog> {
    let catalog = match config.catalog_json.as_deref() {
        Some(json) => MockCatalog::from_json(json).unwrap_or_else(|e| {
            warn!("{e}, using built-in catalog");
            MockCatalog::builtin()
        }),
        None => MockCatalog::builtin(),
    };
    info!("Catalog loaded with {} products", catalog.len());
    Rc::new(catalog)
}
