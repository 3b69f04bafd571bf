//! storefront-ui - Pure view components for the storefront
//!
//! Components take plain data as props and report user actions through
//! callbacks. Nothing in here touches the router: navigation is emitted as
//! a [`storefront_common::NavTarget`] and the app decides what to do with it.

pub mod components;

pub use components::*;
