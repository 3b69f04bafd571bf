//! Server-side renders of the storefront components, checked against the
//! markup a shopper would see.

use dioxus::prelude::*;
use std::collections::HashSet;
use storefront_common::{MockCatalog, NavTarget, Product, ProductCatalog, ProductSelection};
use storefront_ui::{
    side_menu_overlay_class, side_menu_panel_class, Button, ButtonSize, ButtonVariant, ProductCard,
    ProductDetailView, ProductGridView, ProductNotFoundView, SideMenu, WishlistButton,
    NOT_FOUND_RECOVERY,
};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Props, Clone, PartialEq)]
struct DetailHarnessProps {
    product: Product,
    selection: ProductSelection,
}

#[allow(non_snake_case)]
fn DetailHarness(props: DetailHarnessProps) -> Element {
    rsx! {
        ProductDetailView {
            product: props.product,
            selection: props.selection,
            on_select: |_| {},
            on_add_to_cart: |_| {},
            on_buy_now: |_| {},
        }
    }
}

fn render_detail(product: Product, selection: ProductSelection) -> String {
    let mut dom = VirtualDom::new_with_props(DetailHarness, DetailHarnessProps { product, selection });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn product(id: &str) -> Product {
    MockCatalog::builtin().get(id).unwrap()
}

fn first_img_tag(html: &str) -> &str {
    let start = html.find("<img").expect("no <img> rendered");
    let end = html[start..].find('>').unwrap() + start;
    &html[start..=end]
}

// -- WishlistButton --

#[test]
fn wishlist_button_unliked() {
    let html = render(|| {
        rsx! {
            WishlistButton { product_id: "1".to_string() }
        }
    });
    assert!(html.contains(r#"aria-label="Add to wishlist""#));
    assert!(html.contains(r#"aria-pressed="false""#));
    assert!(!html.contains(r#"fill="black""#));
}

#[test]
fn wishlist_button_seeded_liked() {
    let html = render(|| {
        rsx! {
            WishlistButton { product_id: "1".to_string(), is_wishlisted: true }
        }
    });
    assert!(html.contains(r#"aria-label="Remove from wishlist""#));
    assert!(html.contains(r#"fill="black""#));
}

// -- ProductCard --

#[test]
fn product_card_links_to_detail_page() {
    let html = render(|| {
        rsx! {
            ProductCard {
                id: "1".to_string(),
                image_url: "https://cdn.example/1.jpg".to_string(),
                title: "SIGNATURE Collection Piece 1".to_string(),
                price: "120000/-".to_string(),
                on_navigate: |_| {},
            }
        }
    });
    assert!(html.contains(r#"href="/product/1""#));
    assert!(html.contains(r#"src="https://cdn.example/1.jpg""#));
    // Alt text falls back to the title
    assert!(html.contains(r#"alt="SIGNATURE Collection Piece 1""#));
    assert!(html.contains("120000/-"));
    assert!(html.contains("wishlist-button"));
}

#[test]
fn product_card_without_wishlist() {
    let html = render(|| {
        rsx! {
            ProductCard {
                id: "2".to_string(),
                image_url: "b.jpg".to_string(),
                title: "Piece".to_string(),
                price: "1/-".to_string(),
                alt: Some("Front view".to_string()),
                show_wishlist: false,
                on_navigate: |_| {},
            }
        }
    });
    assert!(html.contains(r#"alt="Front view""#));
    assert!(!html.contains("wishlist-button"));
}

#[test]
fn product_card_forwards_wishlist_state() {
    let html = render(|| {
        rsx! {
            ProductCard {
                id: "3".to_string(),
                image_url: "c.jpg".to_string(),
                title: "Piece".to_string(),
                price: "1/-".to_string(),
                is_wishlisted: true,
                on_navigate: |_| {},
            }
        }
    });
    assert!(html.contains(r#"aria-label="Remove from wishlist""#));
}

// -- SideMenu --

#[test]
fn side_menu_closed_is_off_screen_and_inert() {
    let html = render(|| {
        rsx! {
            SideMenu { is_open: false, on_close: |_| {}, on_navigate: |_| {} }
        }
    });
    assert!(html.contains("-translate-x-full"));
    assert!(html.contains("pointer-events-none"));
    assert!(html.contains(r#"data-open="false""#));
    assert!(html.contains(r#"aria-hidden="true""#));
}

#[test]
fn side_menu_open_lists_every_section() {
    let html = render(|| {
        rsx! {
            SideMenu { is_open: true, on_close: |_| {}, on_navigate: |_| {} }
        }
    });
    assert!(html.contains("translate-x-0"));
    assert!(!html.contains("-translate-x-full"));
    assert!(!html.contains("pointer-events-none"));
    assert!(html.contains(r#"aria-label="Close menu""#));

    for (label, href) in [
        ("home", "/"),
        ("our collection", "/collection"),
        ("signature collection", "/collection?category=signature"),
        ("bridal couture", "/collection?category=bridal"),
        ("contemporary drapes", "/collection?category=contemporary"),
        ("luxury fusion lounge", "/collection?category=luxury"),
        ("about us", "/about"),
        ("contact us", "/contact"),
    ] {
        assert!(html.contains(label), "missing {label}");
        assert!(html.contains(&format!(r#"href="{href}""#)), "missing {href}");
    }
}

#[test]
fn side_menu_classes_toggle_with_open_flag() {
    assert!(side_menu_panel_class(true).ends_with("translate-x-0"));
    assert!(side_menu_panel_class(false).ends_with("-translate-x-full"));
    assert!(side_menu_overlay_class(false).contains("pointer-events-none"));
    assert!(side_menu_overlay_class(true).contains("opacity-100"));
}

// -- ProductDetailView --

#[test]
fn detail_renders_every_catalog_field() {
    let catalog = MockCatalog::builtin();
    for product in catalog.list(None) {
        let html = render_detail(product.clone(), ProductSelection::new());
        assert!(html.contains(&product.title), "title of {}", product.id);
        assert!(html.contains(&product.price));
        assert!(html.contains(&product.description));
        for image in &product.images {
            assert!(html.contains(image.as_str()), "image {image}");
        }
        for size in &product.sizes {
            assert!(html.contains(&format!(">{size}<")), "size {size}");
        }
        for color in &product.colors {
            assert!(html.contains(&format!(">{color}<")), "color {color}");
        }
        for detail in &product.details {
            assert!(html.contains(detail.as_str()), "detail {detail}");
        }
    }
}

#[test]
fn detail_preserves_detail_order() {
    let product = product("1");
    let html = render_detail(product.clone(), ProductSelection::new());
    let positions: Vec<usize> = product
        .details
        .iter()
        .map(|d| html.find(d.as_str()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn detail_main_image_follows_selected_index() {
    let product = product("1");
    for index in 0..product.images.len() {
        let selection = ProductSelection {
            image_index: index,
            ..Default::default()
        };
        let html = render_detail(product.clone(), selection);
        let main = first_img_tag(&html);
        assert!(main.contains("main-image"));
        assert!(main.contains(product.images[index].as_str()));
        assert_eq!(html.matches(r#"aria-current="true""#).count(), 1);
    }
}

#[test]
fn detail_hides_thumbnails_for_single_image() {
    let mut product = product("1");
    product.images.truncate(1);
    let html = render_detail(product, ProductSelection::new());
    assert!(!html.contains(r#"data-testid="thumbnails""#));

    let html = render_detail(self::product("2"), ProductSelection::new());
    assert!(html.contains(r#"data-testid="thumbnails""#));
}

#[test]
fn add_to_cart_disabled_until_size_and_color() {
    let product = product("1");

    let html = render_detail(product.clone(), ProductSelection::new());
    assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 1);

    let size_only = ProductSelection {
        size: Some("M".into()),
        ..Default::default()
    };
    let html = render_detail(product.clone(), size_only);
    assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 1);

    let color_only = ProductSelection {
        color: Some("Navy".into()),
        ..Default::default()
    };
    let html = render_detail(product.clone(), color_only);
    assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 1);

    let both = ProductSelection {
        size: Some("M".into()),
        color: Some("Navy".into()),
        ..Default::default()
    };
    let html = render_detail(product, both);
    assert!(!html.contains(r#"aria-disabled="true""#));
    // Selected size and color are highlighted
    assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 2);
}

#[test]
fn detail_wishlist_reflects_page_state() {
    let selection = ProductSelection {
        wishlisted: true,
        ..Default::default()
    };
    let html = render_detail(product("2"), selection);
    assert!(html.contains(r#"aria-label="Remove from wishlist""#));
}

// -- Not found --

#[test]
fn not_found_offers_way_back() {
    let html = render(|| {
        rsx! {
            ProductNotFoundView { on_navigate: |_| {} }
        }
    });
    assert!(html.contains("Product not found"));
    // Sits between the header and footer, so it must not claim a full screen
    assert!(!html.contains("min-h-screen"));
    assert!(html.contains("py-32"));
    assert!(html.contains("Back to Collection"));
    assert_eq!(NOT_FOUND_RECOVERY, NavTarget::collection());
    assert_eq!(NOT_FOUND_RECOVERY.path(), "/collection");
}

// -- ProductGridView --

#[test]
fn grid_renders_a_card_per_product() {
    let html = render(|| {
        rsx! {
            ProductGridView {
                products: MockCatalog::builtin().list(None),
                wishlisted: HashSet::from(["2".to_string()]),
                on_wishlist_toggle: |_| {},
                on_navigate: |_| {},
            }
        }
    });
    assert_eq!(html.matches(r#"data-testid="product-card""#).count(), 2);
    assert!(html.contains(r#"href="/product/1""#));
    assert!(html.contains(r#"href="/product/2""#));
    assert_eq!(html.matches(r#"aria-label="Remove from wishlist""#).count(), 1);
}

#[test]
fn grid_shows_empty_state() {
    let html = render(|| {
        rsx! {
            ProductGridView {
                products: Vec::new(),
                wishlisted: HashSet::new(),
                on_wishlist_toggle: |_| {},
                on_navigate: |_| {},
            }
        }
    });
    assert!(html.contains("empty-collection"));
    assert!(!html.contains("product-card"));
}

// -- Button --

#[test]
fn button_variants_and_disabled_state() {
    let html = render(|| {
        rsx! {
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Large,
                disabled: true,
                test_id: Some("primary"),
                onclick: |_| {},
                "Primary"
            }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Medium,
                class: Some("mt-4".to_string()),
                onclick: |_| {},
                "Outline"
            }
        }
    });
    assert!(html.contains("bg-black text-white"));
    assert!(html.contains("border border-black"));
    assert!(html.contains("mt-4"));
    assert!(html.contains(r#"data-testid="primary""#));
    assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 1);
}
