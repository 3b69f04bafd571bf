//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for special cases.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] test_id: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            disabled,
            aria_disabled: if disabled { Some("true") } else { None },
            "data-testid": test_id,
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Solid black - the main call to action
    Primary,
    /// Black border, white fill
    Outline,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Standard padding
    Medium,
    /// Full-width, tall purchase buttons
    Large,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] test_id: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size_class = match size {
        ButtonSize::Medium => "inline-flex items-center justify-center gap-2 px-4 py-2 text-sm",
        ButtonSize::Large => "flex items-center justify-center w-full h-12 text-lg font-medium",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-black text-white hover:bg-gray-800 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Outline => {
            "border border-black text-black bg-white hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    let computed_class = match &class {
        Some(extra) => format!("{size_class} transition-colors {variant_class} {extra}"),
        None => format!("{size_class} transition-colors {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            id,
            disabled,
            class: Some(computed_class),
            test_id,
            onclick,
            {children}
        }
    }
}
