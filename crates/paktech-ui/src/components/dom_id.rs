//! Element ids for label association and scripted lookups.

use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique DOM id with the given prefix (`"input-7"`).
pub fn next_dom_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", prefix, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let a = next_dom_id("input");
        let b = next_dom_id("input");
        assert_ne!(a, b);
        assert!(a.starts_with("input-"));
    }
}
