//! Shown when the route's product id doesn't resolve

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use storefront_common::NavTarget;

/// Where "Back to Collection" takes the shopper
pub const NOT_FOUND_RECOVERY: NavTarget = NavTarget::Collection { category: None };

#[component]
pub fn ProductNotFoundView(on_navigate: EventHandler<NavTarget>) -> Element {
    rsx! {
        div {
            class: "py-32 bg-white flex items-center justify-center",
            "data-testid": "product-not-found",
            div { class: "text-center",
                h1 { class: "text-2xl font-bold mb-4", "Product not found" }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    test_id: Some("back-to-collection"),
                    onclick: move |_| on_navigate.call(NOT_FOUND_RECOVERY),
                    "Back to Collection"
                }
            }
        }
    }
}
