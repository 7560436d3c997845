//! Directional scrolling for horizontal carousels.

/// Pixels scrolled per carousel control press.
pub const DEFAULT_SCROLL_STEP: i32 = 360;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselDirection {
    Previous,
    Next,
}

impl CarouselDirection {
    /// Signed horizontal offset for one press.
    pub fn offset(&self, step: i32) -> i32 {
        match self {
            CarouselDirection::Previous => -step.abs(),
            CarouselDirection::Next => step.abs(),
        }
    }

    /// Script that smoothly scrolls the element with `container_id`.
    ///
    /// Boundaries are left to the browser's native scroll clamping.
    pub fn scroll_script(&self, container_id: &str, step: i32) -> String {
        let id = serde_json::Value::String(container_id.to_string());
        format!(
            "document.getElementById({id})?.scrollBy({{ left: {}, behavior: 'smooth' }});",
            self.offset(step)
        )
    }

    pub fn aria_label_key(&self) -> &'static str {
        match self {
            CarouselDirection::Previous => "carousel.previous",
            CarouselDirection::Next => "carousel.next",
        }
    }
}
