//! Single-open accordion state.

/// Which item of an accordion is expanded, if any.
///
/// At most one item is open. Toggling the open item closes it; toggling a
/// closed item opens it and closes whichever was open before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// All items closed.
    pub fn closed() -> Self {
        Self { open: None }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let acc = Accordion::default();
        assert_eq!(acc.open_index(), None);
        assert!(!acc.is_open(0));
    }

    #[test]
    fn toggle_open_item_closes_it() {
        let acc = Accordion::closed().toggle(2).toggle(2);
        assert_eq!(acc.open_index(), None);
    }

    #[test]
    fn toggle_closed_item_replaces_open_one() {
        let acc = Accordion::closed().toggle(0).toggle(3);
        assert_eq!(acc.open_index(), Some(3));
        assert!(!acc.is_open(0));
    }

    #[test]
    fn toggle_from_closed_opens() {
        assert_eq!(Accordion::closed().toggle(1).open_index(), Some(1));
    }
}
