//! Shared `web_sys::Window` access and JS error rendering.

#[cfg(target_arch = "wasm32")]
pub(crate) fn browser_window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "browser window is unavailable".to_string())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error(context: &str, err: wasm_bindgen::JsValue) -> String {
    match err.as_string() {
        Some(message) => format!("{context}: {message}"),
        None => format!("{context}: {err:?}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn unsupported(operation: &str) -> String {
    format!("{operation} requires a browser host")
}
