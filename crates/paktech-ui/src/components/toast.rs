//! Toast notification shown after form submissions.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::CloseButton;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }

    /// Errors interrupt assistive tech, everything else waits its turn
    pub fn aria_live(&self) -> &'static str {
        match self {
            ToastKind::Error => "assertive",
            _ => "polite",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastProps {
    pub kind: ToastKind,
    pub message: String,
    /// Auto-dismiss delay; `None` keeps the toast until closed
    #[props(default)]
    pub duration_ms: Option<u64>,
    /// Label of the close control
    #[props(default = "Dismiss".to_string())]
    pub dismiss_label: String,
    pub on_dismiss: EventHandler<()>,
}

/// Dismissable notification. Key it by message so a new one restarts the timer.
#[component]
pub fn Toast(props: ToastProps) -> Element {
    let on_dismiss = props.on_dismiss;
    let duration_ms = props.duration_ms;

    // Timer task is owned by this scope and dropped on unmount
    use_hook(move || {
        if let Some(ms) = duration_ms {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                on_dismiss.call(());
            });
        }
    });

    let class = props.kind.class();
    let aria_live = props.kind.aria_live();

    rsx! {
        div {
            class: "{class}",
            role: "status",
            "aria-live": "{aria_live}",
            p { class: "toast-message", "{props.message}" }
            CloseButton {
                onclick: move |_| on_dismiss.call(()),
                aria_label: props.dismiss_label.clone(),
            }
        }
    }
}
