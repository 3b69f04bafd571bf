use crate::navigate;
use dioxus::prelude::*;
use storefront_common::NavTarget;
use storefront_ui::NavLink;
use tracing::debug;

/// Catch-all for paths no route matches
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    debug!("No route for /{}", segments.join("/"));

    rsx! {
        div { class: "py-32 text-center space-y-6",
            h1 { class: "text-2xl font-bold", "Page not found" }
            NavLink {
                to: NavTarget::Home,
                class: Some("underline".to_string()),
                on_navigate: move |target: NavTarget| navigate(target),
                "Return home"
            }
        }
    }
}
