//! Notification adapter backed by the classic blocking `window.alert` dialog.

use platform_host::{NotificationFuture, NotificationService};

#[derive(Debug, Clone, Copy, Default)]
/// Shows notifications as browser alert dialogs.
pub struct WebNotificationService;

impl NotificationService for WebNotificationService {
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move { show_alert(&render_message(title, body)) })
    }
}

fn render_message(title: &str, body: &str) -> String {
    if body.trim().is_empty() {
        title.to_string()
    } else if title.trim().is_empty() {
        body.to_string()
    } else {
        format!("{title}\n\n{body}")
    }
}

#[cfg(target_arch = "wasm32")]
fn show_alert(message: &str) -> Result<(), String> {
    use crate::interop::{browser_window, js_error};

    browser_window()?
        .alert_with_message(message)
        .map_err(|err| js_error("window.alert failed", err))
}

#[cfg(not(target_arch = "wasm32"))]
fn show_alert(_message: &str) -> Result<(), String> {
    Err(crate::interop::unsupported("alerts"))
}
