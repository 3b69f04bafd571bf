//! Add to cart / buy now buttons

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// "Add to cart" stays disabled until a size and a color are picked.
/// Neither button does anything beyond reporting the click.
#[component]
pub fn PurchaseActions(
    can_add_to_cart: bool,
    on_add_to_cart: EventHandler<()>,
    on_buy_now: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "space-y-4",
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Large,
                disabled: !can_add_to_cart,
                test_id: Some("add-to-cart"),
                onclick: move |_| on_add_to_cart.call(()),
                "ADD TO CART"
            }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Large,
                test_id: Some("buy-now"),
                onclick: move |_| on_buy_now.call(()),
                "BUY NOW"
            }
        }
    }
}
