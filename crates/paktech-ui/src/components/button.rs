//! Button Components
//!
//! One component covers every call to action on the site:
//! - With `href`: renders a link (router link for site paths, plain anchor
//!   for external, `mailto:`, `tel:` and fragment targets)
//! - Without `href`: renders a native `<button>`
//!
//! Variants and sizes only change CSS classes.

use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled brand green, main calls to action
    #[default]
    Primary,
    /// Filled amber
    Secondary,
    /// Transparent with brand border
    Outline,
    /// Text only, for low-emphasis actions
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Which element a button renders as
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonElement {
    /// Native `<button>`
    Action,
    /// Router link to a page of this site
    RouterLink,
    /// Plain `<a>` for everything else
    Anchor,
}

impl ButtonElement {
    pub fn for_href(href: Option<&str>) -> Self {
        match href {
            None => ButtonElement::Action,
            Some(h) if h.starts_with('/') && !h.starts_with("//") => ButtonElement::RouterLink,
            Some(_) => ButtonElement::Anchor,
        }
    }
}

/// Full class list for a button.
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
    extra: Option<&str>,
) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if loading {
        class.push_str(" btn-loading");
    }
    if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Destination; when set the button renders as a link
    pub href: Option<String>,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Busy: shows a spinner and blocks interaction
    #[props(default = false)]
    pub loading: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Decoration before the label
    pub leading: Option<Element>,
    /// Decoration after the label
    pub trailing: Option<Element>,
    /// Click handler
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Type attribute of the native button (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Any other attribute, forwarded to the rendered element
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    /// Button content (text, icons, etc.)
    pub children: Element,
}

/// Styled button or link
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         href: "/contact".to_string(),
///         size: ButtonSize::Large,
///         trailing: rsx! { span { "\u{2192}" } },
///         "Get a Free Quote"
///     }
///
///     Button {
///         variant: ButtonVariant::Outline,
///         button_type: "submit".to_string(),
///         loading: sending(),
///         "Send Message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let ButtonProps {
        href,
        variant,
        size,
        loading,
        disabled,
        leading,
        trailing,
        onclick,
        button_type,
        attributes,
        children,
    } = props;

    // A `class` passed through the attribute list is merged, not replaced
    let (class_attrs, rest): (Vec<Attribute>, Vec<Attribute>) =
        attributes.into_iter().partition(|a| a.name == "class");
    let extra: Vec<String> = class_attrs
        .into_iter()
        .filter_map(|a| match a.value {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        })
        .collect();
    let extra = extra.join(" ");
    let class = button_class(variant, size, loading, Some(&extra));
    let inactive = disabled || loading;

    let content = rsx! {
        if loading {
            span { class: "btn-spinner", "aria-hidden": "true" }
        }
        if let Some(icon) = leading {
            span { class: "btn-icon btn-icon-leading", {icon} }
        }
        span { class: "btn-label", {children} }
        if let Some(icon) = trailing {
            span { class: "btn-icon btn-icon-trailing", {icon} }
        }
    };

    let handle_click = move |evt: MouseEvent| {
        if inactive {
            evt.prevent_default();
            return;
        }
        if let Some(handler) = &onclick {
            handler.call(evt);
        }
    };

    match (ButtonElement::for_href(href.as_deref()), href) {
        (ButtonElement::RouterLink, Some(to)) if !inactive => rsx! {
            Link {
                to: to,
                class: "{class}",
                onclick: handle_click,
                ..rest,
                {content}
            }
        },
        (ButtonElement::RouterLink | ButtonElement::Anchor, Some(to)) => {
            let external = to.starts_with("http://") || to.starts_with("https://");
            rsx! {
                a {
                    class: "{class}",
                    href: if !inactive { "{to}" },
                    target: if external { "_blank" },
                    rel: if external { "noopener noreferrer" },
                    "aria-disabled": if inactive { "true" },
                    "aria-busy": if loading { "true" },
                    tabindex: if inactive { "-1" },
                    onclick: handle_click,
                    ..rest,
                    {content}
                }
            }
        }
        _ => rsx! {
            button {
                class: "{class}",
                r#type: "{button_type}",
                disabled: inactive,
                "aria-busy": if loading { "true" },
                onclick: handle_click,
                ..rest,
                {content}
            }
        },
    }
}

/// Icon button for compact actions (close, carousel arrows, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>, aria_label: String) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: aria_label,
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
