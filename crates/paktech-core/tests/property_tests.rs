//! Property-based tests for the selection state
//!
//! Uses proptest to check the filter and accordion invariants over
//! arbitrary lists and click sequences.

use paktech_core::{Accordion, CategoryFilter, Categorized};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const CATEGORIES: &[&str] = &["web", "mobile", "design", "seo", "cloud"];

#[derive(Debug, Clone)]
struct Entry {
    category: &'static str,
    id: usize,
}

impl Categorized for Entry {
    fn category(&self) -> &'static str {
        self.category
    }
}

/// Lists of entries tagged with their original position
fn entries_strategy() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(0..CATEGORIES.len(), 0..40).prop_map(|cats| {
        cats.into_iter()
            .enumerate()
            .map(|(id, c)| Entry {
                category: CATEGORIES[c],
                id,
            })
            .collect()
    })
}

// ============================================================================
// Category Filter Properties
// ============================================================================

proptest! {
    /// Selecting C yields exactly the entries whose category is C, in order
    #[test]
    fn filter_is_exact_ordered_subset(entries in entries_strategy(), pick in 0..CATEGORIES.len()) {
        let wanted = CATEGORIES[pick];
        let filter = CategoryFilter::from_items(&entries).select(wanted);

        let shown: Vec<usize> = filter.apply(&entries).iter().map(|e| e.id).collect();

        if filter.categories().contains(&wanted) {
            let expected: Vec<usize> = entries
                .iter()
                .filter(|e| e.category == wanted)
                .map(|e| e.id)
                .collect();
            prop_assert_eq!(shown, expected);
        } else {
            // Unknown category keeps the initial (first) selection
            prop_assert_eq!(filter.active(), entries.first().map(|e| e.category));
        }
    }

    /// Initial selection is the first category of the list
    #[test]
    fn initial_selection_is_first(entries in entries_strategy()) {
        let filter = CategoryFilter::from_items(&entries);
        prop_assert_eq!(filter.active(), entries.first().map(|e| e.category));
    }

    /// Category counts add up to the list length
    #[test]
    fn counts_cover_every_entry(entries in entries_strategy()) {
        let filter = CategoryFilter::from_items(&entries);
        let total: usize = filter.counts(&entries).iter().map(|(_, n)| n).sum();
        prop_assert_eq!(total, entries.len());
    }
}

// ============================================================================
// Accordion Properties
// ============================================================================

proptest! {
    /// After any click sequence the open item is determined by the clicks
    #[test]
    fn accordion_matches_reference_model(clicks in prop::collection::vec(0usize..6, 0..50)) {
        let mut acc = Accordion::default();
        let mut model: Option<usize> = None;

        for click in clicks {
            acc = acc.toggle(click);
            model = if model == Some(click) { None } else { Some(click) };
            prop_assert_eq!(acc.open_index(), model);
            for other in 0..6 {
                prop_assert_eq!(acc.is_open(other), model == Some(other));
            }
        }
    }
}
