use crate::catalog::SharedCatalog;
use crate::navigate;
use dioxus::prelude::*;
use storefront_common::{NavTarget, Product, ProductCatalog, ProductSelection, SelectionEvent};
use storefront_ui::{ProductDetailView, ProductNotFoundView};
use tracing::{info, warn};

#[component]
pub fn ProductDetail(id: String) -> Element {
    let catalog: SharedCatalog = use_context();

    match catalog.get(&id) {
        Ok(product) => rsx! {
            // Keyed by id so selection state starts fresh for each product
            ProductDetailContent { key: "{id}", product }
        },
        Err(e) => {
            warn!("Product page for {id:?}: {e}");
            rsx! {
                ProductNotFoundView { on_navigate: move |target: NavTarget| navigate(target) }
            }
        }
    }
}

#[component]
fn ProductDetailContent(product: Product) -> Element {
    let mut selection = use_signal(ProductSelection::new);

    let reduce_product = product.clone();
    let cart_product = product.clone();
    let buy_product = product.clone();

    rsx! {
        ProductDetailView {
            product,
            selection: selection(),
            on_select: move |event: SelectionEvent| {
                selection.write().apply(&reduce_product, event);
            },
            on_add_to_cart: move |_| {
                let current = selection.read();
                info!(
                    "Add to cart requested: {} size={:?} color={:?}",
                    cart_product.id, current.size, current.color
                );
            },
            on_buy_now: move |_| {
                info!("Buy now requested: {}", buy_product.id);
            },
        }
    }
}
