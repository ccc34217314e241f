//! Scroll Controller
//!
//! Offset math for anchor navigation and the header state that depends on
//! it. The DOM side only has to answer "where is this anchor".

use crate::nav::Section;

/// Height of the fixed header, subtracted from every scroll target
pub const HEADER_OFFSET: f64 = 80.0;

/// Vertical offset past which the header switches to its compact style
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Resolves anchor ids to their top position in the document
pub trait AnchorLookup {
    /// Top offset of the element with this id, if it exists
    fn anchor_top(&self, id: &str) -> Option<f64>;
}

impl<F> AnchorLookup for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self(id)
    }
}

/// Scroll position that puts an anchor just below the header
pub fn scroll_target(anchor_top: f64) -> f64 {
    anchor_top - HEADER_OFFSET
}

/// Resolve an anchor id to a scroll position; `None` means "do nothing"
pub fn resolve_target(lookup: &impl AnchorLookup, id: &str) -> Option<f64> {
    let target = lookup.anchor_top(id).map(scroll_target);
    if target.is_none() {
        tracing::debug!(anchor = id, "scroll target not found");
    }
    target
}

/// Whether the header should use its scrolled style
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Header UI flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl HeaderState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Recompute the scrolled flag from the current window offset
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = is_scrolled(scroll_y);
    }

    /// Navigate from the menu. Closes the menu only when the anchor exists.
    pub fn navigate(&mut self, lookup: &impl AnchorLookup, section: Section) -> Option<f64> {
        let target = resolve_target(lookup, section.anchor_id())?;
        self.menu_open = false;
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn page() -> HashMap<&'static str, f64> {
        HashMap::from([("home", 0.0), ("about", 720.0), ("contact", 3400.0)])
    }

    #[test]
    fn test_target_subtracts_header() {
        let anchors = page();
        let lookup = |id: &str| anchors.get(id).copied();
        assert_eq!(resolve_target(&lookup, "about"), Some(640.0));
        assert_eq!(resolve_target(&lookup, "home"), Some(-80.0));
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let anchors = page();
        let lookup = |id: &str| anchors.get(id).copied();
        assert_eq!(resolve_target(&lookup, "pricing"), None);
    }

    #[test]
    fn test_scrolled_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_navigate_closes_menu() {
        let anchors = page();
        let lookup = |id: &str| anchors.get(id).copied();
        let mut header = HeaderState::default();
        header.toggle_menu();
        assert!(header.menu_open);

        assert_eq!(header.navigate(&lookup, Section::Contact), Some(3320.0));
        assert!(!header.menu_open);
    }

    #[test]
    fn test_navigate_missing_anchor_keeps_menu_open() {
        let anchors = page();
        let lookup = |id: &str| anchors.get(id).copied();
        let mut header = HeaderState { menu_open: true, scrolled: false };

        assert_eq!(header.navigate(&lookup, Section::Services), None);
        assert!(header.menu_open);
    }

    #[test]
    fn test_on_scroll_updates_flag() {
        let mut header = HeaderState::default();
        header.on_scroll(120.0);
        assert!(header.scrolled);
        header.on_scroll(10.0);
        assert!(!header.scrolled);
    }
}
