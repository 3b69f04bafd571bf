//! Product detail view components

mod details_list;
mod gallery;
mod not_found;
mod option_picker;
mod purchase_actions;
mod view;

pub use details_list::DetailsList;
pub use gallery::ProductGallery;
pub use not_found::{ProductNotFoundView, NOT_FOUND_RECOVERY};
pub use option_picker::OptionPicker;
pub use purchase_actions::PurchaseActions;
pub use view::ProductDetailView;
