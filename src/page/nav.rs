//! Header, navigation, and mobile menu state
//!
//! Pure scroll-position arithmetic on plain section metrics; the document
//! port applies the resulting classes and scroll targets.

/// Vertical scroll offset past which the header renders as "scrolled"
const HEADER_SCROLL_THRESHOLD: f64 = 20.0;

/// Extra lead distance when deciding which section is active
const ACTIVE_SECTION_LEAD: f64 = 100.0;

/// Position and size of one `section[id]` element
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMetrics {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionMetrics {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Whether the header should carry its condensed "scrolled" styling
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// The section a reader is currently in: the last one whose top has been
/// scrolled past, with the header height and a fixed lead discounted.
/// Returns `None` above the first section.
pub fn active_section<'a>(
    sections: &'a [SectionMetrics],
    scroll_y: f64,
    header_height: f64,
) -> Option<&'a str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - header_height - ACTIVE_SECTION_LEAD {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Scroll destination for an in-page anchor: the section top minus the
/// sticky header's height. A bare `#` anchor has no destination.
pub fn scroll_target(href: &str, sections: &[SectionMetrics], header_height: f64) -> Option<f64> {
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    sections
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.top - header_height)
}

/// Mobile navigation drawer state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip on the toggle button; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close when a nav link is activated
    pub fn close(&mut self) {
        self.open = false;
    }
}
