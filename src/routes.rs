// Current-page detection for navigation highlighting.

/// Last `/`-separated segment of a URL path (`"/shop/about.html"` -> `"about.html"`).
#[inline]
pub fn current_page(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or(pathname)
}

/// A link is active when its href contains the current page as a substring.
/// Several links may match, and an empty page (site root) matches every link.
#[inline]
pub fn link_is_active(href: &str, page: &str) -> bool {
    href.contains(page)
}
