use dioxus::prelude::*;

/// Bulleted product details, in catalog order
#[component]
pub fn DetailsList(details: Vec<String>) -> Element {
    if details.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { "data-testid": "product-details",
            h3 { class: "text-lg font-medium mb-3", "Details" }
            ul { class: "space-y-2",
                for (index, detail) in details.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: "text-gray-700 text-sm leading-5",
                        "• {detail}"
                    }
                }
            }
        }
    }
}
