//! Router-agnostic link

use dioxus::prelude::*;
use storefront_common::NavTarget;

/// Anchor that renders a real `href` but hands navigation to the parent.
///
/// Plain clicks are intercepted and reported through `on_navigate` so the
/// app's router can handle them.
#[component]
pub fn NavLink(
    to: NavTarget,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    on_navigate: EventHandler<NavTarget>,
    children: Element,
) -> Element {
    let href = to.path();

    rsx! {
        a {
            href: "{href}",
            class: class.as_deref(),
            aria_label: aria_label.as_deref(),
            onclick: move |evt| {
                evt.prevent_default();
                on_navigate.call(to.clone());
            },
            {children}
        }
    }
}
