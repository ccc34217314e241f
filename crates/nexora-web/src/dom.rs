//! Browser glue for the scroll controller

use leptos::prelude::*;
use nexora_core::{Section, scroll};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Top offset of the element with this id
pub fn anchor_top(id: &str) -> Option<f64> {
    document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|el| f64::from(el.offset_top()))
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Scroll a section under the header. Missing anchors are ignored.
pub fn scroll_to_section(section: Section) -> bool {
    match scroll::resolve_target(&anchor_top, section.anchor_id()) {
        Some(top) => {
            smooth_scroll_to(top);
            true
        }
        None => false,
    }
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Section named by the current `#hash`, if any
pub fn location_section() -> Option<Section> {
    window()
        .location()
        .hash()
        .ok()
        .and_then(|hash| Section::from_hash(&hash))
}

/// Developer console
pub fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}
