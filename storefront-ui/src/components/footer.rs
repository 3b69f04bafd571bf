use crate::components::nav_link::NavLink;
use dioxus::prelude::*;
use storefront_common::NavTarget;

#[component]
pub fn FooterView(brand_name: String, on_navigate: EventHandler<NavTarget>) -> Element {
    rsx! {
        footer { class: "border-t border-gray-200 px-16 py-12 flex items-center justify-between text-sm text-gray-600",
            span { "© {brand_name}" }
            div { class: "flex gap-8 uppercase",
                NavLink { to: NavTarget::About, on_navigate, "About" }
                NavLink { to: NavTarget::Contact, on_navigate, "Contact" }
            }
        }
    }
}
