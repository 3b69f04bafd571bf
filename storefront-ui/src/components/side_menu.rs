//! Slide-out navigation menu
//!
//! Fully controlled: the parent owns `is_open` and decides what closing
//! means. The menu only reports dismissal and navigation.

use crate::components::icons::{DashIcon, MenuIcon};
use crate::components::nav_link::NavLink;
use crate::components::utils::cn;
use dioxus::prelude::*;
use storefront_common::{side_menu_entries, MenuEntry, NavTarget};
use tracing::debug;

/// Classes for the full-screen dismiss overlay
pub fn side_menu_overlay_class(is_open: bool) -> String {
    cn([
        Some("fixed inset-0 z-40 transition-opacity duration-300"),
        Some(if is_open {
            "opacity-100"
        } else {
            "opacity-0 pointer-events-none"
        }),
    ])
}

/// Classes for the sliding panel
pub fn side_menu_panel_class(is_open: bool) -> String {
    cn([
        Some("fixed top-0 left-0 w-full max-w-[960px] h-screen z-50 transition-transform duration-300"),
        Some("bg-gradient-to-br from-white/40 to-white/1 backdrop-blur-[50px]"),
        Some(if is_open {
            "translate-x-0"
        } else {
            "-translate-x-full"
        }),
    ])
}

/// Dismiss request from the overlay or the close icon. Ignored while closed.
fn dismiss(is_open: bool, close: impl FnOnce()) {
    if is_open {
        debug!("Side menu dismissed");
        close();
    }
}

/// Entry click: the menu closes before the navigation is reported
fn select_entry(target: NavTarget, close: impl FnOnce(), navigate: impl FnOnce(NavTarget)) {
    debug!("Side menu entry selected: {target}");
    close();
    navigate(target);
}

/// Overlay plus off-canvas panel listing the site sections.
///
/// Dismissed by clicking the overlay, the close icon, or any entry.
/// While closed the overlay ignores clicks.
#[component]
pub fn SideMenu(
    is_open: bool,
    on_close: EventHandler<()>,
    on_navigate: EventHandler<NavTarget>,
) -> Element {
    let entries = side_menu_entries();
    let overlay_class = side_menu_overlay_class(is_open);
    let panel_class = side_menu_panel_class(is_open);

    rsx! {
        div {
            class: "{overlay_class}",
            "data-testid": "side-menu-overlay",
            onclick: move |_| dismiss(is_open, || on_close.call(())),
        }

        div {
            class: "{panel_class}",
            "data-testid": "side-menu",
            "data-open": if is_open { "true" } else { "false" },
            aria_hidden: if is_open { "false" } else { "true" },
            button {
                class: "absolute left-[61px] top-[52px]",
                aria_label: "Close menu",
                "data-testid": "side-menu-close",
                onclick: move |_| dismiss(is_open, || on_close.call(())),
                MenuIcon {}
            }

            div { class: "absolute left-[61px] top-[178px]",
                nav { class: "flex flex-col items-start gap-[59px]",
                    for entry in entries.iter() {
                        SideMenuEntry {
                            key: "{entry.label}",
                            entry: entry.clone(),
                            on_select: move |target: NavTarget| {
                                select_entry(target, || on_close.call(()), |t| on_navigate.call(t))
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SideMenuEntry(entry: MenuEntry, on_select: EventHandler<NavTarget>) -> Element {
    let link_class = cn([
        Some("block text-black text-[30px] font-normal leading-normal uppercase hover:opacity-70 transition-opacity"),
        entry.indented.then_some("pl-[40px]"),
    ]);

    rsx! {
        div { class: "relative flex items-center",
            if entry.indented {
                DashIcon { class: "absolute left-0 w-[21px] h-[3px]" }
            }
            NavLink {
                to: entry.target.clone(),
                class: Some(link_class),
                on_navigate: on_select,
                "{entry.label}"
            }
        }
    }
}
