use super::collection::use_wishlist;
use crate::catalog::SharedCatalog;
use crate::navigate;
use dioxus::prelude::*;
use storefront_common::{NavTarget, ProductCatalog, StorefrontConfig};
use storefront_ui::{Button, ButtonSize, ButtonVariant, ProductGridView};

#[component]
pub fn Home() -> Element {
    let config: StorefrontConfig = use_context();
    let catalog: SharedCatalog = use_context();
    let (wishlisted, on_wishlist_toggle) = use_wishlist();
    let featured = catalog.list(None);

    rsx! {
        section { class: "px-16 py-24 text-center space-y-8",
            h1 { class: "text-5xl uppercase tracking-[0.2em]", "{config.brand_name}" }
            p { class: "text-gray-600 uppercase", "Couture, drapes and bridal pieces made by hand" }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Medium,
                onclick: move |_| navigate(NavTarget::collection()),
                "Explore the collection"
            }
        }
        section { class: "px-16 pb-24",
            ProductGridView {
                products: featured,
                wishlisted: wishlisted(),
                show_wishlist: config.show_wishlist_on_cards,
                on_wishlist_toggle,
                on_navigate: move |target: NavTarget| navigate(target),
            }
        }
    }
}
