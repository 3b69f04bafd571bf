use crate::catalog::SharedCatalog;
use crate::navigate;
use dioxus::prelude::*;
use std::collections::HashSet;
use storefront_common::{Category, NavTarget, ProductCatalog, StorefrontConfig, WishlistChange};
use storefront_ui::ProductGridView;
use tracing::debug;

/// Session-only wishlist for a product grid: the hearted ids plus the
/// handler that keeps them in sync with the cards
pub(super) fn use_wishlist() -> (Signal<HashSet<String>>, EventHandler<WishlistChange>) {
    let mut wishlisted = use_signal(HashSet::<String>::new);
    let on_toggle = use_callback(move |change: WishlistChange| {
        let mut ids = wishlisted.write();
        if change.liked {
            ids.insert(change.product_id);
        } else {
            ids.remove(&change.product_id);
        }
    });
    (wishlisted, on_toggle)
}

/// Parse the `?category=` query; anything unrecognised shows everything
fn parse_category(raw: Option<&str>) -> Option<Category> {
    let raw = raw.filter(|r| !r.is_empty())?;
    match raw.parse() {
        Ok(category) => Some(category),
        Err(e) => {
            debug!("{e}, showing the full collection");
            None
        }
    }
}

#[component]
pub fn Collection(category: Option<String>) -> Element {
    let config: StorefrontConfig = use_context();
    let catalog: SharedCatalog = use_context();
    let (wishlisted, on_wishlist_toggle) = use_wishlist();

    let category = parse_category(category.as_deref());
    let heading = category
        .map(|c| c.display_name())
        .unwrap_or("Our Collection");
    let products = catalog.list(category);

    rsx! {
        section { class: "px-16 py-16 space-y-12",
            h1 { class: "text-3xl uppercase tracking-widest text-center", "{heading}" }
            ProductGridView {
                products,
                wishlisted: wishlisted(),
                show_wishlist: config.show_wishlist_on_cards,
                on_wishlist_toggle,
                on_navigate: move |target: NavTarget| navigate(target),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category(Some("luxury")), Some(Category::Luxury));
        assert_eq!(parse_category(Some("sale")), None);
        assert_eq!(parse_category(Some("")), None);
        assert_eq!(parse_category(None), None);
    }
}
