use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Scroll depth after which the navbar gets its drop shadow.
pub const NAVBAR_SHADOW_THRESHOLD: f64 = 50.0;
pub const NAVBAR_SHADOW: &str = "box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);";

pub fn navbar_shadow(scroll_y: f64) -> Option<&'static str> {
    (scroll_y > NAVBAR_SHADOW_THRESHOLD).then_some(NAVBAR_SHADOW)
}

/// Element id an in-page link points at. The bare `#` is left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Page offset that puts the target just below the fixed navbar.
pub fn offset_below_navbar(rect_top: f64, scroll_y: f64, navbar_height: f64) -> f64 {
    rect_top + scroll_y - navbar_height
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

/// Smoothly scrolls to the element with the given id, keeping it clear of
/// the `.navbar`. Returns false if there is no such element.
pub fn smooth_scroll_to(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        log::debug!("No scroll target #{}", id);
        return false;
    };
    let navbar_height = document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok())
        .map(|navbar| f64::from(navbar.offset_height()))
        .unwrap_or_default();
    let top = offset_below_navbar(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or_default(),
        navbar_height,
    );
    let mut options = ScrollToOptions::new();
    options.top(top);
    options.behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_only_past_threshold() {
        assert_eq!(navbar_shadow(0.0), None);
        assert_eq!(navbar_shadow(50.0), None);
        assert_eq!(navbar_shadow(50.5), Some(NAVBAR_SHADOW));
        assert_eq!(navbar_shadow(1200.0), Some(NAVBAR_SHADOW));
    }

    #[test]
    fn bare_hash_is_not_a_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/pricing"), None);
        assert_eq!(anchor_target("#features"), Some("features"));
    }

    #[test]
    fn offset_subtracts_navbar() {
        assert_eq!(offset_below_navbar(300.0, 1000.0, 80.0), 1220.0);
        assert_eq!(offset_below_navbar(-200.0, 1000.0, 80.0), 720.0);
    }
}
