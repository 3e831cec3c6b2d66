//! Prompt adapter backed by `window.prompt`.

use platform_host::{DialogFuture, DialogService};

#[derive(Debug, Clone, Copy, Default)]
/// Shows text prompts as browser prompt dialogs.
pub struct WebDialogService;

impl DialogService for WebDialogService {
    fn prompt<'a>(
        &'a self,
        message: &'a str,
        default_value: &'a str,
    ) -> DialogFuture<'a, Option<String>> {
        Box::pin(async move { show_prompt(message, default_value) })
    }
}

#[cfg(target_arch = "wasm32")]
fn show_prompt(message: &str, default_value: &str) -> Option<String> {
    let window = crate::interop::browser_window().ok()?;
    match window.prompt_with_message_and_default(message, default_value) {
        Ok(answer) => answer,
        Err(err) => {
            web_sys::console::warn_1(&err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn show_prompt(_message: &str, _default_value: &str) -> Option<String> {
    None
}
