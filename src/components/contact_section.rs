//! Contact form, contact channels and office map.
//!
//! The form is a [`ContactSession`] held in a signal. Submitting validates
//! locally, then hands the request to the site's contact transport on a
//! spawned task. The record is cleared on success and kept on failure.

use dioxus::prelude::*;
use paktech_core::content::{contact_channels, MAP_EMBED_URL};
use paktech_core::contact::{submit, MAX_MESSAGE_CHARS};
use paktech_core::{
    tr, ContactError, ContactField, ContactSession, Locale, SubmissionStatus,
};
use paktech_ui::{Button, ButtonSize, Input, SectionHeader, TextArea, Toast, ToastKind};

use crate::context::{use_locale, use_transport};

/// How long the success notice stays up.
const SUCCESS_NOTICE_MS: u64 = 5000;

/// Notification to show for `status`, if any.
fn notice_for(status: &SubmissionStatus, locale: Locale) -> Option<(ToastKind, String)> {
    match status {
        SubmissionStatus::Sent(_) => Some((ToastKind::Success, tr(locale, "contact.success"))),
        SubmissionStatus::Failed(err) => Some((ToastKind::Error, tr(locale, err.notice_key()))),
        SubmissionStatus::Idle | SubmissionStatus::Sending => None,
    }
}

/// Field that failed local validation.
fn invalid_field(status: &SubmissionStatus) -> Option<ContactField> {
    match status {
        SubmissionStatus::Failed(ContactError::Validation { field, .. }) => Some(*field),
        _ => None,
    }
}

/// Success notices dismiss themselves; errors wait for the visitor.
fn notice_duration(kind: ToastKind) -> Option<u64> {
    (kind == ToastKind::Success).then_some(SUCCESS_NOTICE_MS)
}

fn input_type_for(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        _ => "text",
    }
}

fn update_field(mut session: Signal<ContactSession>, field: ContactField, value: String) {
    let current = session();
    let form = current.form.clone().with(field, value);
    session.set(current.with_form(form));
}

#[component]
pub fn ContactSection(#[props(default = true)] animated: bool) -> Element {
    let locale = use_locale();
    let transport = use_transport();
    let mut session = use_signal(ContactSession::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let (next, request) = session().begin(locale());
        session.set(next);
        let Some(request) = request else {
            return;
        };

        let transport = transport.clone();
        spawn(async move {
            let outcome = submit(transport.as_ref(), &request).await;
            let next = session().finish(outcome);
            session.set(next);
        });
    };

    let status = session.read().status.clone();
    let sending = status.is_sending();
    let invalid = invalid_field(&status);
    let notice = notice_for(&status, locale());

    rsx! {
        section { id: "contact", class: "section contact-section",
            div { class: "container",
                SectionHeader {
                    eyebrow: tr(locale(), "contact.eyebrow"),
                    title: tr(locale(), "contact.title"),
                    subtitle: tr(locale(), "contact.subtitle"),
                    animated,
                }

                if let Some((kind, message)) = notice {
                    Toast {
                        key: "{message}",
                        message: message.clone(),
                        kind,
                        duration_ms: notice_duration(kind),
                        dismiss_label: tr(locale(), "toast.dismiss"),
                        on_dismiss: move |_| {
                            let next = session().acknowledge();
                            session.set(next);
                        },
                    }
                }

                div { class: "contact-grid",
                    form { class: "contact-form card", novalidate: true, onsubmit,
                        for field in ContactField::all().iter().copied() {
                            if field == ContactField::Message {
                                TextArea {
                                    key: "{field}",
                                    name: field.as_str().to_string(),
                                    label: tr(locale(), field.label_key()),
                                    placeholder: tr(locale(), field.placeholder_key()),
                                    value: session.read().form.get(field).to_string(),
                                    rows: 6,
                                    max_length: MAX_MESSAGE_CHARS,
                                    required: true,
                                    disabled: sending,
                                    invalid: invalid == Some(field),
                                    oninput: move |value: String| update_field(session, field, value),
                                }
                            } else {
                                Input {
                                    key: "{field}",
                                    name: field.as_str().to_string(),
                                    label: tr(locale(), field.label_key()),
                                    placeholder: tr(locale(), field.placeholder_key()),
                                    value: session.read().form.get(field).to_string(),
                                    input_type: input_type_for(field).to_string(),
                                    required: true,
                                    disabled: sending,
                                    invalid: invalid == Some(field),
                                    oninput: move |value: String| update_field(session, field, value),
                                }
                            }
                        }

                        Button {
                            button_type: "submit".to_string(),
                            size: ButtonSize::Large,
                            loading: sending,
                            class: "contact-submit",
                            if sending {
                                {tr(locale(), "contact.sending")}
                            } else {
                                {tr(locale(), "contact.send")}
                            }
                        }
                    }

                    aside { class: "contact-info",
                        h3 { class: "contact-info-title", {tr(locale(), "contact.info_title")} }
                        ul { class: "contact-channels",
                            for channel in contact_channels() {
                                li { key: "{channel.label}", class: "contact-channel",
                                    span { class: "channel-icon", "aria-hidden": "true", "{channel.icon}" }
                                    div {
                                        span { class: "channel-label", "{channel.label}" }
                                        if let Some(href) = channel.href {
                                            a { class: "channel-value", href: "{href}", "{channel.value}" }
                                        } else {
                                            span { class: "channel-value", "{channel.value}" }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "contact-map",
                            iframe {
                                src: MAP_EMBED_URL,
                                title: tr(locale(), "contact.map_title"),
                                "loading": "lazy",
                                "referrerpolicy": "no-referrer-when-downgrade",
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paktech_core::ContactReceipt;

    use crate::context::SiteContext;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_every_field_and_no_notice() {
        fn app() -> Element {
            use_context_provider(|| Signal::new(Locale::English));
            use_context_provider(SiteContext::simulated);
            rsx! { ContactSection { animated: false } }
        }
        let html = render(app);
        for field in ContactField::all() {
            assert!(html.contains(&format!("name=\"{}\"", field.as_str())), "{field}");
        }
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("Send Message"));
        assert!(!html.contains("toast"));
        assert!(html.contains(MAP_EMBED_URL));
    }

    #[test]
    fn notices_follow_status() {
        let locale = Locale::English;
        assert_eq!(notice_for(&SubmissionStatus::Idle, locale), None);
        assert_eq!(notice_for(&SubmissionStatus::Sending, locale), None);

        let (kind, text) =
            notice_for(&SubmissionStatus::Sent(ContactReceipt::default()), locale).unwrap();
        assert_eq!(kind, ToastKind::Success);
        assert_eq!(text, tr(locale, "contact.success"));

        let failed = SubmissionStatus::Failed(ContactError::Network("reset".into()));
        let (kind, text) = notice_for(&failed, locale).unwrap();
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(text, tr(locale, "contact.error_network"));
    }

    #[test]
    fn rejected_and_failed_requests_get_different_notices() {
        let locale = Locale::English;
        let rejected = SubmissionStatus::Failed(ContactError::Server {
            status: 422,
            message: "email domain rejected".into(),
        });
        let outage = SubmissionStatus::Failed(ContactError::Server {
            status: 503,
            message: "Service Unavailable".into(),
        });

        let (_, rejected_text) = notice_for(&rejected, locale).unwrap();
        let (_, outage_text) = notice_for(&outage, locale).unwrap();
        assert_eq!(rejected_text, tr(locale, "contact.error_rejected"));
        assert_eq!(outage_text, tr(locale, "contact.error_server"));
        assert_ne!(rejected_text, outage_text);
    }

    #[test]
    fn only_validation_marks_a_field() {
        let status = SubmissionStatus::Failed(ContactError::Validation {
            field: ContactField::Email,
            reason: "missing @".into(),
        });
        assert_eq!(invalid_field(&status), Some(ContactField::Email));

        let status = SubmissionStatus::Failed(ContactError::Server {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(invalid_field(&status), None);
    }
}
