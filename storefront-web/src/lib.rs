pub mod catalog;
pub mod pages;

use catalog::SharedCatalog;
use dioxus::prelude::*;
use pages::{About, Collection, Contact, Home, PageNotFound, ProductDetail, StorefrontLayout};
use storefront_common::{NavTarget, StorefrontConfig};
use tracing::debug;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_JSON: &str = include_str!("../storefront.json");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StorefrontLayout)]
    #[route("/")]
    Home {},
    #[route("/collection?:category")]
    Collection { category: Option<String> },
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/product/:id")]
    ProductDetail { id: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Collection { category } => Route::Collection {
                category: category.map(|c| c.as_str().to_string()),
            },
            NavTarget::About => Route::About {},
            NavTarget::Contact => Route::Contact {},
            NavTarget::Product { id } => Route::ProductDetail { id },
        }
    }
}

/// Push a navigation target emitted by a view onto the router
pub fn navigate(target: NavTarget) {
    debug!("Navigating to {target}");
    navigator().push(Route::from(target));
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| StorefrontConfig::load_or_default(CONFIG_JSON));
    use_context_provider(|| catalog::from_config(&config) as SharedCatalog);

    rsx! {
        document::Title { "{config.brand_name}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
