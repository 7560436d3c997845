//! Input Field Components
//!
//! Labelled text inputs and textareas for the contact form.
//! Features:
//! - Label bound to the control through a generated id
//! - Required marker and native `required` attribute
//! - Error state with `aria-invalid`

use dioxus::prelude::*;

use crate::components::next_dom_id;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Form field name
    pub name: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, tel, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Marks the field as failing validation
    #[props(default = false)]
    pub invalid: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         name: "name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = use_hook(|| next_dom_id("input"));
    let extra_class = props.class.as_deref().unwrap_or("");
    let mut input_class = String::from("form-input");
    if props.invalid {
        input_class.push_str(" invalid");
    }
    if !extra_class.is_empty() {
        input_class.push(' ');
        input_class.push_str(extra_class);
    }

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                FieldLabel { target: id.clone(), text: label.clone(), required: props.required }
            }
            input {
                id: "{id}",
                name: "{props.name}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                "aria-invalid": if props.invalid { "true" },
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Form field name
    pub name: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Upper bound on characters, enforced by the browser
    #[props(default)]
    pub max_length: Option<usize>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub invalid: bool,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = use_hook(|| next_dom_id("textarea"));
    let class = if props.invalid {
        "form-input form-textarea invalid"
    } else {
        "form-input form-textarea"
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                FieldLabel { target: id.clone(), text: label.clone(), required: props.required }
            }
            textarea {
                id: "{id}",
                name: "{props.name}",
                class: "{class}",
                rows: "{props.rows}",
                maxlength: props.max_length.map(|n| n.to_string()),
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                "aria-invalid": if props.invalid { "true" },
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[component]
fn FieldLabel(target: String, text: String, required: bool) -> Element {
    rsx! {
        label { class: "form-label", r#for: "{target}",
            "{text}"
            if required {
                span { class: "form-required", "aria-hidden": "true", " *" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn label_points_at_input() {
        fn app() -> Element {
            rsx! {
                Input {
                    name: "email".to_string(),
                    value: "".to_string(),
                    oninput: move |_| {},
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    required: true,
                }
            }
        }
        let html = render(app);
        let id_start = html.find("for=\"").expect("label rendered") + 5;
        let id_end = id_start + html[id_start..].find('"').unwrap();
        let id = &html[id_start..id_end];
        assert!(html.contains(&format!("id=\"{}\"", id)));
        assert!(html.contains("form-required"));
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn invalid_textarea_is_marked() {
        fn app() -> Element {
            rsx! {
                TextArea {
                    name: "message".to_string(),
                    value: "hi".to_string(),
                    oninput: move |_| {},
                    invalid: true,
                }
            }
        }
        let html = render(app);
        assert!(html.contains("aria-invalid=\"true\""));
        assert!(html.contains("form-textarea invalid"));
        assert!(!html.contains("<label"));
    }
}
