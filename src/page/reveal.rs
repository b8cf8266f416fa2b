//! Reveal-on-scroll tracking
//!
//! Replays the intersection-observer behavior on plain geometry: an
//! element reveals once at least a tenth of it is inside the viewport,
//! with the bottom edge pulled in by a fixed margin, and it stays
//! revealed afterwards.

use std::collections::HashSet;

/// Fraction of an element that must be visible before it reveals
const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom inset applied to the viewport before the intersection test
const BOTTOM_ROOT_MARGIN: f64 = 50.0;

/// Viewport-relative position of one observed element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRect {
    pub id: String,
    /// Top edge relative to the viewport
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Intersection test against the inset viewport
fn is_intersecting(rect: &ElementRect, viewport_height: f64) -> bool {
    if rect.height <= 0.0 {
        return false;
    }
    let root_bottom = viewport_height - BOTTOM_ROOT_MARGIN;
    let visible_top = rect.top.max(0.0);
    let visible_bottom = (rect.top + rect.height).min(root_bottom);
    let visible = (visible_bottom - visible_top).max(0.0);
    visible / rect.height >= REVEAL_THRESHOLD
}

/// Tracks which observed elements have revealed so far
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-test every element against the current viewport; returns the ids
    /// that reveal for the first time on this pass.
    pub fn observe(&mut self, elements: &[ElementRect], viewport_height: f64) -> Vec<String> {
        let mut newly = Vec::new();
        for rect in elements {
            if self.revealed.contains(&rect.id) {
                continue;
            }
            if is_intersecting(rect, viewport_height) {
                self.revealed.insert(rect.id.clone());
                newly.push(rect.id.clone());
            }
        }
        newly
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}
