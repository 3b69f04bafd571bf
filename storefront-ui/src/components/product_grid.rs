//! Grid of product cards

use crate::components::product_card::ProductCard;
use dioxus::prelude::*;
use std::collections::HashSet;
use storefront_common::{NavTarget, Product, WishlistChange};

#[component]
pub fn ProductGridView(
    products: Vec<Product>,
    /// Ids the shopper has hearted in this session
    wishlisted: HashSet<String>,
    #[props(default = true)] show_wishlist: bool,
    on_wishlist_toggle: EventHandler<WishlistChange>,
    on_navigate: EventHandler<NavTarget>,
) -> Element {
    if products.is_empty() {
        return rsx! {
            div {
                class: "py-24 text-center text-gray-500 uppercase",
                "data-testid": "empty-collection",
                "New pieces are on their way"
            }
        };
    }

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-x-10 gap-y-16",
            for product in products.iter() {
                ProductCard {
                    key: "{product.id}",
                    id: product.id.clone(),
                    image_url: product.cover_image().unwrap_or_default().to_string(),
                    title: product.title.clone(),
                    price: product.price.clone(),
                    show_wishlist,
                    is_wishlisted: wishlisted.contains(&product.id),
                    on_wishlist_toggle: Some(on_wishlist_toggle),
                    on_navigate,
                }
            }
        }
    }
}
