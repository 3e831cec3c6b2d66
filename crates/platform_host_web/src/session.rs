//! Page reload and navigation adapter backed by `window.location`.

use platform_host::{SessionFuture, SessionService};

#[derive(Debug, Clone, Copy, Default)]
/// Controls the current browser page.
pub struct WebSessionService;

impl SessionService for WebSessionService {
    fn reload<'a>(&'a self) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async move { reload_page() })
    }

    fn navigate<'a>(&'a self, url: &'a str) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async move { navigate_to(url) })
    }
}

#[cfg(target_arch = "wasm32")]
fn reload_page() -> Result<(), String> {
    use crate::interop::{browser_window, js_error};

    browser_window()?
        .location()
        .reload()
        .map_err(|err| js_error("location.reload failed", err))
}

#[cfg(target_arch = "wasm32")]
fn navigate_to(url: &str) -> Result<(), String> {
    use crate::interop::{browser_window, js_error};

    browser_window()?
        .location()
        .set_href(url)
        .map_err(|err| js_error("location.href update failed", err))
}

#[cfg(not(target_arch = "wasm32"))]
fn reload_page() -> Result<(), String> {
    Err(crate::interop::unsupported("page reload"))
}

#[cfg(not(target_arch = "wasm32"))]
fn navigate_to(_url: &str) -> Result<(), String> {
    Err(crate::interop::unsupported("page navigation"))
}
