//! Storefront icons
//!
//! Paths are drawn at their design size; override the rendered size with
//! the `class` prop.

use dioxus::prelude::*;

/// Heart outline, filled black when `filled`
#[component]
pub fn HeartIcon(
    #[props(default)] filled: bool,
    #[props(default = "w-5 h-5")] class: &'static str,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "21",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            "data-filled": if filled { "true" } else { "false" },
            path {
                d: "M1.52148 7.14813C1.52167 14.7411 7.59578 18.5377 12.1515 21.9545C16.3276 18.5377 22.4019 14.741 22.4019 7.14823C22.4019 -0.444532 12.1515 0.518484 12.1515 6.389C12.1515 0.138746 1.5213 -0.444835 1.52148 7.14813Z",
                stroke: "black",
                stroke_width: "3",
                stroke_linejoin: "round",
                fill: if filled { "black" } else { "none" },
            }
        }
    }
}

/// Hamburger (three rounded bars). Opens the side menu and closes it again.
#[component]
pub fn MenuIcon(#[props(default = "w-[34px] h-[28px]")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "34",
            height: "28",
            view_box: "0 0 34 28",
            fill: "none",
            stroke: "black",
            stroke_width: "2.5",
            stroke_linecap: "round",
            path { d: "M1.25 1.25H32.75" }
            path { d: "M1.25 14.4H32.75" }
            path { d: "M1.25 26.75H32.75" }
        }
    }
}

/// Short horizontal rule marking a sub-collection entry
#[component]
pub fn DashIcon(#[props(default = "w-[21px] h-[3px]")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "21",
            height: "4",
            view_box: "0 0 21 4",
            fill: "none",
            path { d: "M0 2.25H21", stroke: "black", stroke_width: "3" }
        }
    }
}
