//! Single-select button row for sizes and colors

use crate::components::utils::cn;
use dioxus::prelude::*;

/// One button per option; the selected one is drawn inverted.
/// Re-selecting the current option keeps it selected.
#[component]
pub fn OptionPicker(
    label: String,
    options: Vec<String>,
    selected: Option<String>,
    test_id: &'static str,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { "data-testid": test_id,
            h3 { class: "text-lg font-medium mb-3", "{label}" }
            div { class: "flex gap-2",
                for option in options.iter() {
                    OptionButton {
                        key: "{option}",
                        value: option.clone(),
                        is_selected: selected.as_deref() == Some(option.as_str()),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(value: String, is_selected: bool, on_select: EventHandler<String>) -> Element {
    let class = cn([
        Some("px-4 py-2 border text-sm font-medium transition-all"),
        Some(if is_selected {
            "border-black bg-black text-white"
        } else {
            "border-gray-300 hover:border-gray-400"
        }),
    ]);

    rsx! {
        button {
            class: "{class}",
            aria_pressed: if is_selected { "true" } else { "false" },
            onclick: {
                let value = value.clone();
                move |_| on_select.call(value.clone())
            },
            "{value}"
        }
    }
}
