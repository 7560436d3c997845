//! One-shot "scrolled into view" latch for entrance animations.

/// Latches the first time its element becomes visible and never resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed a visibility observation.
    pub fn observe(self, visible: bool) -> Self {
        Self {
            revealed: self.revealed || visible,
        }
    }

    /// CSS classes of the animated wrapper
    pub fn class(&self) -> &'static str {
        if self.revealed {
            "reveal revealed"
        } else {
            "reveal"
        }
    }
}

/// Script that resolves once the element with `id` intersects the viewport.
///
/// The observer disconnects after the first hit so the animation never replays.
pub fn observe_script(id: &str) -> String {
    let id = serde_json::Value::String(id.to_string());
    format!(
        r#"const el = document.getElementById({id});
if (!el || !('IntersectionObserver' in window)) {{
  dioxus.send(true);
}} else {{
  const io = new IntersectionObserver((entries) => {{
    if (entries.some((e) => e.isIntersecting)) {{
      io.disconnect();
      dioxus.send(true);
    }}
  }}, {{ threshold: 0.2 }});
  io.observe(el);
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert_eq!(latch.class(), "reveal");

        let latch = latch.observe(false).observe(true);
        assert!(latch.is_revealed());

        // Scrolling back out does not replay
        let latch = latch.observe(false);
        assert!(latch.is_revealed());
        assert_eq!(latch.class(), "reveal revealed");
    }

    #[test]
    fn observe_script_quotes_id() {
        let js = observe_script("hdr-3");
        assert!(js.contains("document.getElementById(\"hdr-3\")"));
        assert!(js.contains("io.disconnect()"));
    }
}
