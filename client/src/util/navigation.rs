//! Full-page navigation.
//!
//! Used where the router's soft navigation is not enough: the idle lock must
//! drop every mounted view and its in-memory state.

/// Replace the current document with `href`.
pub fn hard_navigate(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            log::warn!("navigation to {href} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
