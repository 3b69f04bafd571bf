//! Fixed page header

use crate::components::icons::MenuIcon;
use crate::components::nav_link::NavLink;
use dioxus::prelude::*;
use storefront_common::NavTarget;

/// Header bar: menu trigger on the left, brand in the middle, collection
/// shortcut on the right
#[component]
pub fn HeaderView(
    brand_name: String,
    on_menu_open: EventHandler<()>,
    on_navigate: EventHandler<NavTarget>,
) -> Element {
    rsx! {
        header { class: "fixed top-0 inset-x-0 z-30 h-24 bg-white/90 backdrop-blur flex items-center justify-between px-[61px]",
            button {
                aria_label: "Open menu",
                "data-testid": "menu-button",
                onclick: move |_| on_menu_open.call(()),
                MenuIcon {}
            }
            NavLink {
                to: NavTarget::Home,
                class: Some("text-3xl uppercase tracking-[0.3em] text-black".to_string()),
                on_navigate,
                "{brand_name}"
            }
            NavLink {
                to: NavTarget::collection(),
                class: Some("text-sm uppercase text-black hover:opacity-70".to_string()),
                on_navigate,
                "Collection"
            }
        }
    }
}
