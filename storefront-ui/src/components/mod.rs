//! Shared UI components

pub mod button;
pub mod footer;
pub mod header;
pub mod icons;
pub mod nav_link;
pub mod page_layout;
pub mod product_card;
pub mod product_detail;
pub mod product_grid;
pub mod side_menu;
pub mod utils;
pub mod wishlist_button;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use footer::FooterView;
pub use header::HeaderView;
pub use icons::{DashIcon, HeartIcon, MenuIcon};
pub use nav_link::NavLink;
pub use page_layout::StorefrontLayoutView;
pub use product_card::ProductCard;
pub use product_detail::{
    DetailsList, OptionPicker, ProductDetailView, ProductGallery, ProductNotFoundView,
    PurchaseActions, NOT_FOUND_RECOVERY,
};
pub use product_grid::ProductGridView;
pub use side_menu::{side_menu_overlay_class, side_menu_panel_class, SideMenu};
pub use utils::cn;
pub use wishlist_button::WishlistButton;
