//! Category Pills Component
//!
//! Horizontal row of category filter pills driving a `CategoryFilter`.
//! The selected pill is filled with the brand colour.

use dioxus::prelude::*;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Available categories, in display order
    pub categories: Vec<&'static str>,
    /// Currently selected category
    pub selected: Option<&'static str>,
    /// Optional item count shown next to each label (same order as `categories`)
    #[props(default)]
    pub counts: Vec<usize>,
    /// Accessible name of the group
    #[props(default = "Category selection".to_string())]
    pub aria_label: String,
    /// Handler called when a category is selected
    pub on_select: EventHandler<&'static str>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(|| CategoryFilter::from_items(services()));
///
/// rsx! {
///     CategoryPills {
///         categories: filter.read().categories().to_vec(),
///         selected: filter.read().active(),
///         on_select: move |cat| filter.set(filter().select(cat))
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    rsx! {
        div {
            class: "category-pills",
            role: "tablist",
            "aria-label": "{props.aria_label}",
            for (index, cat) in props.categories.iter().copied().enumerate() {
                {
                    let is_selected = props.selected == Some(cat);
                    let count = props.counts.get(index).copied();
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{cat}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            r#type: "button",
                            role: "tab",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(cat),
                            "{cat}"
                            if let Some(count) = count {
                                span { class: "pill-count", "{count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
