//! Selection state for the product detail page
//!
//! The page owns a [`ProductSelection`] and reduces [`SelectionEvent`]s
//! emitted by the view into it. Every transition is total: events that
//! don't apply to the product (an out-of-range image, a size the product
//! doesn't come in) leave the state as it was.

use crate::product::Product;
use tracing::debug;

/// Events emitted by the detail view
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    SelectImage(usize),
    SelectSize(String),
    SelectColor(String),
    /// Wishlist button reported its new state
    SetWishlisted(bool),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductSelection {
    pub image_index: usize,
    pub size: Option<String>,
    pub color: Option<String>,
    pub wishlisted: bool,
}

impl ProductSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event. Returns whether the state changed.
    pub fn apply(&mut self, product: &Product, event: SelectionEvent) -> bool {
        let before = self.clone();
        match event {
            SelectionEvent::SelectImage(index) => {
                if index < product.images.len() {
                    self.image_index = index;
                } else {
                    debug!(
                        "Ignoring image index {index} for product {} ({} images)",
                        product.id,
                        product.images.len()
                    );
                }
            }
            SelectionEvent::SelectSize(size) => {
                if product.has_size(&size) {
                    self.size = Some(size);
                } else {
                    debug!("Ignoring size {size:?} for product {}", product.id);
                }
            }
            SelectionEvent::SelectColor(color) => {
                if product.has_color(&color) {
                    self.color = Some(color);
                } else {
                    debug!("Ignoring color {color:?} for product {}", product.id);
                }
            }
            SelectionEvent::SetWishlisted(wishlisted) => {
                self.wishlisted = wishlisted;
            }
        }
        *self != before
    }

    /// Add to cart needs both a size and a color
    pub fn can_add_to_cart(&self) -> bool {
        self.size.is_some() && self.color.is_some()
    }

    /// URL of the image currently shown in the main gallery slot
    pub fn current_image<'a>(&self, product: &'a Product) -> Option<&'a str> {
        product
            .image(self.image_index)
            .or_else(|| product.cover_image())
    }

    pub fn is_size_selected(&self, size: &str) -> bool {
        self.size.as_deref() == Some(size)
    }

    pub fn is_color_selected(&self, color: &str) -> bool {
        self.color.as_deref() == Some(color)
    }
}
