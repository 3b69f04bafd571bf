//! storefront-common - Domain types shared by the storefront UI and web app
//!
//! Nothing in here depends on Dioxus. Products, the catalog interface,
//! selection and wishlist state, and navigation targets live here so they
//! can be unit tested without a renderer.

pub mod catalog;
pub mod config;
pub mod nav;
pub mod product;
pub mod selection;
pub mod wishlist;

pub use catalog::{CatalogError, MockCatalog, ProductCatalog};
pub use config::{ConfigError, StorefrontConfig};
pub use nav::{side_menu_entries, MenuEntry, NavTarget};
pub use product::{Category, Product, UnknownCategory};
pub use selection::{ProductSelection, SelectionEvent};
pub use wishlist::{WishlistChange, WishlistState};
