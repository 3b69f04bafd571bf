use dioxus::prelude::*;
use storefront_common::StorefrontConfig;

#[component]
pub fn About() -> Element {
    let config: StorefrontConfig = use_context();

    rsx! {
        section { class: "max-w-3xl mx-auto px-16 py-24 space-y-6 text-gray-700 leading-7",
            h1 { class: "text-3xl uppercase tracking-widest text-black", "About us" }
            p {
                "{config.brand_name} is an atelier of couture, drapes and bridal wear. "
                "Every piece is cut, embroidered and finished by hand in India."
            }
            p {
                "Our signature, bridal, contemporary and luxury fusion lines share one idea: "
                "garments made slowly, to be worn for years."
            }
        }
    }
}
