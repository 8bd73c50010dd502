/// Element id an in-page link points at. Bare `#` and external links give
/// `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that leaves the target just below a fixed header.
pub fn scroll_top(target_offset_top: i32, header_height: i32, extra_offset: i32) -> f64 {
    f64::from(target_offset_top) - f64::from(header_height) - f64::from(extra_offset)
}
