//! Product detail view - main component
//!
//! Pure view: the page owns the [`ProductSelection`] and reduces the
//! [`SelectionEvent`]s emitted here into it.

use super::details_list::DetailsList;
use super::gallery::ProductGallery;
use super::option_picker::OptionPicker;
use super::purchase_actions::PurchaseActions;
use crate::components::utils::HELVETICA;
use dioxus::prelude::*;
use storefront_common::{Product, ProductSelection, SelectionEvent, WishlistChange};

#[component]
pub fn ProductDetailView(
    product: Product,
    selection: ProductSelection,
    on_select: EventHandler<SelectionEvent>,
    on_add_to_cart: EventHandler<()>,
    on_buy_now: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "container mx-auto px-16 py-16", "data-testid": "product-detail",
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-16",
                ProductGallery {
                    product: product.clone(),
                    image_index: selection.image_index,
                    wishlisted: selection.wishlisted,
                    on_select_image: move |index| on_select.call(SelectionEvent::SelectImage(index)),
                    on_wishlist_toggle: move |change: WishlistChange| {
                        on_select.call(SelectionEvent::SetWishlisted(change.liked))
                    },
                }

                div { class: "space-y-8",
                    div {
                        h1 {
                            class: "text-black font-normal uppercase mb-4 text-[32px] leading-10",
                            style: "{HELVETICA}",
                            "{product.title}"
                        }
                        p {
                            class: "text-black font-normal text-2xl",
                            style: "{HELVETICA}",
                            "data-testid": "product-price",
                            "{product.price}"
                        }
                    }

                    if !product.description.is_empty() {
                        p {
                            class: "text-gray-700 text-base leading-6",
                            style: "{HELVETICA}",
                            "{product.description}"
                        }
                    }

                    OptionPicker {
                        label: "Size".to_string(),
                        options: product.sizes.clone(),
                        selected: selection.size.clone(),
                        test_id: "size-picker",
                        on_select: move |size| on_select.call(SelectionEvent::SelectSize(size)),
                    }

                    OptionPicker {
                        label: "Color".to_string(),
                        options: product.colors.clone(),
                        selected: selection.color.clone(),
                        test_id: "color-picker",
                        on_select: move |color| on_select.call(SelectionEvent::SelectColor(color)),
                    }

                    PurchaseActions {
                        can_add_to_cart: selection.can_add_to_cart(),
                        on_add_to_cart,
                        on_buy_now,
                    }

                    DetailsList { details: product.details.clone() }
                }
            }
        }
    }
}
