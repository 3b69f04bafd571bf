//! Storefront page layout
//!
//! Slots for header, page content, footer and overlays (the side menu).

use dioxus::prelude::*;

/// Layout view (pure, props-based)
#[component]
pub fn StorefrontLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    #[props(default)] header: Option<Element>,
    #[props(default)] footer: Option<Element>,
    /// Rendered last so it stacks above the page
    #[props(default)]
    overlay: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-white flex flex-col",
            if let Some(h) = header {
                {h}
            }
            main { class: "flex-1 pt-24", {children} }
            if let Some(f) = footer {
                {f}
            }
            if let Some(o) = overlay {
                {o}
            }
        }
    }
}
