//! Viewport intersection, as computed by the browser's `IntersectionObserver`.

/// Vertical extent of an element relative to the top of the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Observer options: the visible fraction required and the bottom root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionOptions {
    pub threshold: f64,
    /// Added to the viewport's bottom edge; negative values shrink it
    pub root_margin_bottom: f64,
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self { threshold: 0.0, root_margin_bottom: 0.0 }
    }
}

impl IntersectionOptions {
    /// Fraction of `element` inside a viewport of `viewport_height`, after the root margin.
    pub fn ratio(&self, element: Rect, viewport_height: f64) -> f64 {
        let root_bottom = viewport_height + self.root_margin_bottom;
        let visible = element.bottom().min(root_bottom) - element.top.max(0.0);
        if visible <= 0.0 {
            return 0.0;
        }
        if element.height <= 0.0 {
            return 1.0;
        }
        (visible / element.height).min(1.0)
    }

    pub fn is_intersecting(&self, element: Rect, viewport_height: f64) -> bool {
        let ratio = self.ratio(element, viewport_height);
        ratio > 0.0 && ratio >= self.threshold
    }
}
