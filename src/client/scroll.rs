//! Smooth scrolling for in-page anchor links.

/// Returns the element id an anchor link scrolls to, for `href="#id"` links.
///
/// `#` alone has no target; links not starting with `#` are not handled.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
