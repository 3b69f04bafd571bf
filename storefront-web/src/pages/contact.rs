use dioxus::prelude::*;
use storefront_common::StorefrontConfig;

#[component]
pub fn Contact() -> Element {
    let config: StorefrontConfig = use_context();

    rsx! {
        section { class: "max-w-3xl mx-auto px-16 py-24 space-y-6 text-gray-700 leading-7",
            h1 { class: "text-3xl uppercase tracking-widest text-black", "Contact us" }
            p { "Visit the {config.brand_name} studio or reach our client advisors for fittings and bespoke orders." }
            ul { class: "space-y-2",
                li { "Monday to Saturday, 11:00 to 19:00" }
                li { "Appointments recommended for bridal consultations" }
            }
        }
    }
}
