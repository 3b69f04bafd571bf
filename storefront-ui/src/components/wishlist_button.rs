//! Wishlist heart toggle

use crate::components::icons::HeartIcon;
use crate::components::utils::cn;
use dioxus::prelude::*;
use storefront_common::{WishlistChange, WishlistState};
use tracing::debug;

/// Flip `state` and hand the resulting change to `report`, once per click
fn toggle_and_report(state: &mut WishlistState, report: impl FnOnce(WishlistChange)) {
    report(state.toggle());
}

/// Heart toggle with its own liked state, seeded from `is_wishlisted`.
///
/// Each click flips the state and reports the new value through
/// `on_toggle`. The state lives in this component, so it resets when the
/// button is remounted.
#[component]
pub fn WishlistButton(
    #[props(default)] product_id: String,
    #[props(default)] is_wishlisted: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] on_toggle: Option<EventHandler<WishlistChange>>,
) -> Element {
    let mut state = use_signal(|| WishlistState::new(product_id.clone(), is_wishlisted));
    let liked = state.read().is_liked();
    let aria_label = state.read().aria_label();

    let class = cn([
        Some("flex items-center justify-center transition-all duration-200 hover:scale-110"),
        class.as_deref(),
    ]);

    rsx! {
        button {
            class: "{class}",
            "data-testid": "wishlist-button",
            aria_label,
            aria_pressed: if liked { "true" } else { "false" },
            onclick: move |evt| {
                // Cards wrap the button; don't let the click reach the link
                evt.stop_propagation();
                state.with_mut(|state| {
                    toggle_and_report(state, |change| match &on_toggle {
                        Some(handler) => handler.call(change),
                        None => debug!("No listener for wishlist change on {:?}", change.product_id),
                    })
                });
            },
            HeartIcon { filled: liked }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_each_click_reports_once_with_new_state() {
        let mut state = WishlistState::new("1", false);
        let reported = RefCell::new(Vec::new());

        toggle_and_report(&mut state, |change| reported.borrow_mut().push(change));
        assert_eq!(reported.borrow().len(), 1);
        assert!(reported.borrow()[0].liked);
        assert!(state.is_liked());

        toggle_and_report(&mut state, |change| reported.borrow_mut().push(change));
        assert_eq!(reported.borrow().len(), 2);
        assert!(!reported.borrow()[1].liked);
        assert_eq!(state, WishlistState::new("1", false));
        assert!(reported.borrow().iter().all(|c| c.product_id == "1"));
    }

    #[test]
    fn test_seeded_liked_reports_unlike_first() {
        let mut state = WishlistState::new("2", true);
        let mut reported = None;
        toggle_and_report(&mut state, |change| reported = Some(change));
        assert_eq!(
            reported,
            Some(WishlistChange {
                product_id: "2".to_string(),
                liked: false,
            })
        );
    }
}
