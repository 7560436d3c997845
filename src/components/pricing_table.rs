//! Pricing tiers with a category filter and a billing cycle toggle.

use dioxus::prelude::*;
use paktech_core::content::{format_amount, pricing_tiers, Price, PricingTier};
use paktech_core::{tr, tr_format, BillingCycle, CategoryFilter, Locale};
use paktech_ui::{Button, ButtonVariant, CategoryPills, SectionHeader};

use crate::context::use_locale;

/// Amount and suffix shown for `price` under `cycle`.
fn price_label(price: &Price, cycle: BillingCycle, locale: Locale) -> (String, String) {
    match price.amount(cycle) {
        Some(amount) => {
            let suffix = if price.is_recurring() {
                tr(locale, cycle.suffix_key())
            } else {
                tr(locale, "pricing.one_off")
            };
            (format_amount(amount), suffix)
        }
        None => (tr(locale, "pricing.custom"), String::new()),
    }
}

#[component]
pub fn PricingTable(#[props(default = true)] animated: bool) -> Element {
    let locale = use_locale();
    let mut filter = use_signal(|| CategoryFilter::from_items(pricing_tiers()));
    let mut cycle = use_signal(BillingCycle::default);

    let visible: Vec<&'static PricingTier> = filter.read().apply(pricing_tiers());
    let has_recurring = visible.iter().any(|t| t.price.is_recurring());
    let categories = filter.read().categories().to_vec();

    rsx! {
        section { id: "pricing", class: "section pricing-section",
            div { class: "container",
                SectionHeader {
                    eyebrow: tr(locale(), "pricing.eyebrow"),
                    title: tr(locale(), "pricing.title"),
                    subtitle: tr(locale(), "pricing.subtitle"),
                    animated,
                }

                CategoryPills {
                    categories,
                    selected: filter.read().active(),
                    aria_label: tr(locale(), "pricing.eyebrow"),
                    on_select: move |cat: &'static str| {
                        let next = filter().select(cat);
                        filter.set(next);
                    },
                }

                if has_recurring {
                    div { class: "billing-toggle", role: "group",
                        for option in BillingCycle::all().iter().copied() {
                            button {
                                key: "{option:?}",
                                r#type: "button",
                                class: if cycle() == option { "billing-option active" } else { "billing-option" },
                                "aria-pressed": if cycle() == option { "true" } else { "false" },
                                onclick: move |_| cycle.set(option),
                                {tr(locale(), option.label_key())}
                            }
                        }
                    }
                }

                div { class: "pricing-grid",
                    for tier in visible {
                        PricingCard { key: "{tier.name}", tier: *tier, cycle: cycle() }
                    }
                }
            }
        }
    }
}

#[component]
fn PricingCard(tier: PricingTier, cycle: BillingCycle) -> Element {
    let locale = use_locale();
    let (amount, suffix) = price_label(&tier.price, cycle, locale());
    let saving = match cycle {
        BillingCycle::Annual => tier.price.annual_saving_percent(),
        BillingCycle::Monthly => None,
    };
    let saving_text = saving.map(|percent| {
        let percent = percent.to_string();
        tr_format(locale(), "pricing.save", &[("percent", percent.as_str())])
    });
    let cta_variant = if tier.highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };
    let card_class = if tier.highlighted {
        "card pricing-card highlighted"
    } else {
        "card pricing-card"
    };

    rsx! {
        article { class: "{card_class}",
            if tier.highlighted {
                span { class: "pricing-badge", {tr(locale(), "pricing.popular")} }
            }
            h3 { class: "card-title", "{tier.name}" }
            p { class: "card-text", "{tier.tagline}" }
            div { class: "pricing-amount",
                span { class: "pricing-value", "{amount}" }
                if !suffix.is_empty() {
                    span { class: "pricing-suffix", " {suffix}" }
                }
            }
            if let Some(text) = saving_text {
                span { class: "pricing-saving", "{text}" }
            }
            ul { class: "feature-list",
                for feature in tier.features {
                    li { key: "{feature}", class: "feature-item", "{feature}" }
                }
            }
            Button {
                href: "/contact".to_string(),
                variant: cta_variant,
                class: "pricing-cta",
                "{tier.cta}"
            }
        }
    }
}
