use tracing::info;

fn main() {
    dioxus::logger::initialize_default();
    info!("Starting storefront");
    dioxus::launch(storefront_web::App);
}
