//! Wishlist toggle state
//!
//! Held by whichever component renders the wishlist button. Never persisted.

use tracing::debug;

/// Emitted to the parent every time the button is toggled
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WishlistChange {
    pub product_id: String,
    pub liked: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WishlistState {
    product_id: String,
    liked: bool,
}

impl WishlistState {
    pub fn new(product_id: impl Into<String>, liked: bool) -> Self {
        Self {
            product_id: product_id.into(),
            liked,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Flip the liked flag and return the change to report upward
    pub fn toggle(&mut self) -> WishlistChange {
        self.liked = !self.liked;
        debug!("Wishlist toggled for {:?}: {}", self.product_id, self.liked);
        WishlistChange {
            product_id: self.product_id.clone(),
            liked: self.liked,
        }
    }

    /// Accessible label for the button
    pub fn aria_label(&self) -> &'static str {
        if self.liked {
            "Remove from wishlist"
        } else {
            "Add to wishlist"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        for initial in [false, true] {
            let mut state = WishlistState::new("1", initial);
            state.toggle();
            state.toggle();
            assert_eq!(state.is_liked(), initial);
        }
    }

    #[test]
    fn test_toggle_reports_new_state() {
        let mut state = WishlistState::new("42", false);
        assert_eq!(
            state.toggle(),
            WishlistChange {
                product_id: "42".into(),
                liked: true
            }
        );
        assert_eq!(
            state.toggle(),
            WishlistChange {
                product_id: "42".into(),
                liked: false
            }
        );
    }

    #[test]
    fn test_aria_label_tracks_state() {
        let mut state = WishlistState::new("1", false);
        assert_eq!(state.aria_label(), "Add to wishlist");
        state.toggle();
        assert_eq!(state.aria_label(), "Remove from wishlist");
    }

    #[test]
    fn test_default_has_empty_product_id() {
        let state = WishlistState::default();
        assert_eq!(state.product_id(), "");
        assert!(!state.is_liked());
    }
}
