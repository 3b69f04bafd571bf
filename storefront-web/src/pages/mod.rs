mod about;
mod collection;
mod contact;
mod home;
mod layout;
mod not_found;
mod product_detail;

pub use about::About;
pub use collection::Collection;
pub use contact::Contact;
pub use home::Home;
pub use layout::StorefrontLayout;
pub use not_found::PageNotFound;
pub use product_detail::ProductDetail;
