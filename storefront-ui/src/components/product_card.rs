//! Product card component - pure view with callbacks

use crate::components::nav_link::NavLink;
use crate::components::utils::{cn, HELVETICA};
use crate::components::wishlist_button::WishlistButton;
use dioxus::prelude::*;
use storefront_common::{NavTarget, WishlistChange};

/// Grid tile for a product: linked image, centered title and price, and an
/// optional wishlist overlay.
///
/// Wishlist state and callback are forwarded to [`WishlistButton`] as-is.
/// The card holds no state of its own.
#[component]
pub fn ProductCard(
    id: String,
    image_url: String,
    title: String,
    price: String,
    /// Alt text for the image (default: the title)
    #[props(default)]
    alt: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default = true)] show_wishlist: bool,
    #[props(default)] is_wishlisted: bool,
    #[props(default)] on_wishlist_toggle: Option<EventHandler<WishlistChange>>,
    on_navigate: EventHandler<NavTarget>,
) -> Element {
    let alt = alt.filter(|a| !a.is_empty()).unwrap_or_else(|| title.clone());
    let container_class = cn([Some("flex flex-col items-center gap-8"), class.as_deref()]);
    let text_class = "text-black text-center font-normal text-xl leading-[30px] uppercase";

    rsx! {
        div { class: "{container_class}", "data-testid": "product-card",
            div { class: "relative w-full group",
                NavLink {
                    to: NavTarget::product(id.clone()),
                    class: Some("block w-full".to_string()),
                    on_navigate,
                    div { class: "relative w-full aspect-[421/553] overflow-hidden",
                        img {
                            src: "{image_url}",
                            alt: "{alt}",
                            class: "w-full h-full object-cover transition-transform duration-300 group-hover:scale-105",
                        }
                    }
                }

                if show_wishlist {
                    div { class: "absolute top-2.5 right-2.5",
                        WishlistButton {
                            product_id: id.clone(),
                            is_wishlisted,
                            on_toggle: on_wishlist_toggle,
                            class: Some("bg-white/80 backdrop-blur-sm p-1.5 rounded-full hover:bg-white/90".to_string()),
                        }
                    }
                }
            }

            div { class: "text-center",
                h3 { class: "{text_class}",
                    span { style: "{HELVETICA}", "{title}" }
                }
                p { class: "{text_class} mt-1",
                    span { style: "{HELVETICA}", "{price}" }
                }
            }
        }
    }
}
