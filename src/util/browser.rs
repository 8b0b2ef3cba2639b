//! Browser navigation outside the router.

/// Hard-redirect the browser to `path`, dropping all client-side state.
///
/// Used by the forced-logout path, which runs outside any component and
/// therefore cannot reach the router context. No-op outside a browser.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::error!("redirect to {path} failed");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}
