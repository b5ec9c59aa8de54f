//! Imperative navigation outside the router's reactive scope.
//!
//! The response interceptor runs inside API futures where `use_navigate` is
//! not reachable, so it navigates through `window.location` instead. Going to
//! the page already shown is a no-op.

/// Send the browser to `path` unless it is already there.
pub fn go(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if location.pathname().ok().as_deref() == Some(path) {
            return;
        }
        let _ = location.set_href(path);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
