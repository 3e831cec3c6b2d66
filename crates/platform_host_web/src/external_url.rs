//! External URL adapter backed by `window.open`.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Opens external URLs in a new browser tab.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_in_new_tab(url) })
    }
}

#[cfg(target_arch = "wasm32")]
fn open_in_new_tab(url: &str) -> Result<(), String> {
    use crate::interop::{browser_window, js_error};

    browser_window()?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|err| js_error("window.open failed", err))
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_new_tab(_url: &str) -> Result<(), String> {
    Err(crate::interop::unsupported("opening external urls"))
}
