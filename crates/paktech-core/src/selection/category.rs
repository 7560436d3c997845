//! Category/tab filter over a static list.

/// Items that belong to exactly one display category.
pub trait Categorized {
    fn category(&self) -> &'static str;
}

/// Single active category over a fixed set of categories.
///
/// The category set is taken from the items in first-appearance order, and
/// the first one is active initially. Filtering keeps the original order of
/// the static list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    categories: Vec<&'static str>,
    active: usize,
}

impl CategoryFilter {
    /// Build a filter whose categories are the distinct categories of `items`.
    pub fn from_items<T: Categorized>(items: &[T]) -> Self {
        let mut categories: Vec<&'static str> = Vec::new();
        for item in items {
            let cat = item.category();
            if !categories.contains(&cat) {
                categories.push(cat);
            }
        }
        Self {
            categories,
            active: 0,
        }
    }

    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    /// The active category, or `None` when there are no categories at all.
    pub fn active(&self) -> Option<&'static str> {
        self.categories.get(self.active).copied()
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active() == Some(category)
    }

    /// Make `category` active. Unknown categories leave the filter unchanged.
    pub fn select(self, category: &str) -> Self {
        match self.categories.iter().position(|c| *c == category) {
            Some(active) => Self { active, ..self },
            None => {
                tracing::debug!(category, "ignoring selection of unknown category");
                self
            }
        }
    }

    /// Items of the active category, in their original order.
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        match self.active() {
            Some(active) => items.iter().filter(|i| i.category() == active).collect(),
            None => Vec::new(),
        }
    }

    /// Number of items per category, in category order.
    pub fn counts<T: Categorized>(&self, items: &[T]) -> Vec<(&'static str, usize)> {
        self.categories
            .iter()
            .map(|cat| (*cat, items.iter().filter(|i| i.category() == *cat).count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, u32);

    impl Categorized for Item {
        fn category(&self) -> &'static str {
            self.0
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item("web", 1),
            Item("mobile", 2),
            Item("web", 3),
            Item("seo", 4),
            Item("mobile", 5),
        ]
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let filter = CategoryFilter::from_items(&items());
        assert_eq!(filter.categories(), &["web", "mobile", "seo"]);
        assert_eq!(filter.active(), Some("web"));
    }

    #[test]
    fn select_overwrites_active() {
        let filter = CategoryFilter::from_items(&items()).select("mobile");
        assert_eq!(filter.active(), Some("mobile"));
        let ids: Vec<u32> = filter.apply(&items()).iter().map(|i| i.1).collect();
        assert_eq!(ids, vec![2, 5]);

        let filter = filter.select("seo");
        assert!(filter.is_active("seo"));
        assert!(!filter.is_active("mobile"));
    }

    #[test]
    fn unknown_category_is_ignored() {
        let filter = CategoryFilter::from_items(&items()).select("mobile");
        let same = filter.clone().select("blockchain");
        assert_eq!(same, filter);
    }

    #[test]
    fn empty_list_has_no_active() {
        let filter = CategoryFilter::from_items::<Item>(&[]);
        assert_eq!(filter.active(), None);
        assert!(filter.apply::<Item>(&[]).is_empty());
    }

    #[test]
    fn counts_per_category() {
        let filter = CategoryFilter::from_items(&items());
        assert_eq!(
            filter.counts(&items()),
            vec![("web", 2), ("mobile", 2), ("seo", 1)]
        );
    }
}
