use crate::{navigate, Route};
use dioxus::prelude::*;
use storefront_common::{NavTarget, StorefrontConfig};
use storefront_ui::{FooterView, HeaderView, SideMenu, StorefrontLayoutView};

/// Shared page chrome. Owns the side menu's open flag.
#[component]
pub fn StorefrontLayout() -> Element {
    let config: StorefrontConfig = use_context();
    let mut menu_open = use_signal(|| false);

    rsx! {
        StorefrontLayoutView {
            header: rsx! {
                HeaderView {
                    brand_name: config.brand_name.clone(),
                    on_menu_open: move |_| menu_open.set(true),
                    on_navigate: move |target: NavTarget| navigate(target),
                }
            },
            footer: rsx! {
                FooterView {
                    brand_name: config.brand_name.clone(),
                    on_navigate: move |target: NavTarget| navigate(target),
                }
            },
            overlay: rsx! {
                SideMenu {
                    is_open: menu_open(),
                    on_close: move |_| menu_open.set(false),
                    on_navigate: move |target: NavTarget| navigate(target),
                }
            },
            Outlet::<Route> {}
        }
    }
}
