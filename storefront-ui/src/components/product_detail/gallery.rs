//! Main image with wishlist overlay and thumbnail strip

use crate::components::utils::cn;
use crate::components::wishlist_button::WishlistButton;
use dioxus::prelude::*;
use storefront_common::{Product, WishlistChange};

#[component]
pub fn ProductGallery(
    product: Product,
    image_index: usize,
    wishlisted: bool,
    on_select_image: EventHandler<usize>,
    on_wishlist_toggle: EventHandler<WishlistChange>,
) -> Element {
    let main_image = product
        .image(image_index)
        .or_else(|| product.cover_image())
        .unwrap_or_default()
        .to_string();
    let title = product.title.clone();
    let thumbnails: Vec<(usize, String, String)> = product
        .images
        .iter()
        .enumerate()
        .map(|(index, url)| (index, url.clone(), format!("{title} view {}", index + 1)))
        .collect();

    rsx! {
        div { class: "space-y-8",
            div { class: "relative aspect-[421/553] overflow-hidden bg-gray-100",
                img {
                    src: "{main_image}",
                    alt: "{title}",
                    class: "w-full h-full object-cover",
                    "data-testid": "main-image",
                }
                div { class: "absolute top-4 right-4",
                    WishlistButton {
                        product_id: product.id.clone(),
                        is_wishlisted: wishlisted,
                        on_toggle: Some(on_wishlist_toggle),
                        class: Some("bg-white/80 backdrop-blur-sm p-2 rounded-full hover:bg-white/90".to_string()),
                    }
                }
            }

            if product.has_gallery() {
                div { class: "flex gap-4 overflow-x-auto", "data-testid": "thumbnails",
                    for (index, url, alt) in thumbnails {
                        button {
                            key: "{index}",
                            class: cn([
                                Some("flex-shrink-0 w-20 h-20 overflow-hidden border-2 transition-all"),
                                Some(if index == image_index {
                                    "border-black"
                                } else {
                                    "border-gray-200 hover:border-gray-400"
                                }),
                            ]),
                            aria_current: if index == image_index { Some("true") } else { None },
                            onclick: move |_| on_select_image.call(index),
                            img {
                                src: "{url}",
                                alt: "{alt}",
                                class: "w-full h-full object-cover",
                            }
                        }
                    }
                }
            }
        }
    }
}
