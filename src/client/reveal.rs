//! One-shot reveal of content cards as they scroll into view.

use super::observer::{IntersectionOptions, Rect};

/// Elements that start hidden and fade in on first intersection
pub const REVEAL_SELECTORS: [&str; 5] =
    [".preview-card", ".community-item", ".project-card", ".gallery-item", ".timeline-item"];

pub const REVEAL_OPTIONS: IntersectionOptions =
    IntersectionOptions { threshold: 0.1, root_margin_bottom: -50.0 };

/// Style of an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// `opacity: 0; transform: translateY(20px)`
    Hidden,
    /// `opacity: 1; transform: translateY(0)`
    Revealed,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    /// Starts observing `count` elements, all hidden.
    pub fn new(count: usize) -> Self {
        Self { states: vec![RevealState::Hidden; count] }
    }

    pub fn states(&self) -> &[RevealState] {
        &self.states
    }

    /// Applies one observer callback with the current element positions.
    ///
    /// Returns the indices revealed by this call. Revealed elements stay revealed when
    /// they leave the viewport again.
    pub fn observe(&mut self, rects: &[Rect], viewport_height: f64) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (index, (state, rect)) in self.states.iter_mut().zip(rects).enumerate() {
            if *state == RevealState::Hidden
                && REVEAL_OPTIONS.is_intersecting(*rect, viewport_height)
            {
                *state = RevealState::Revealed;
                revealed.push(index);
            }
        }
        revealed
    }
}
