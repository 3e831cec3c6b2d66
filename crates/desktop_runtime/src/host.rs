//! Host-side runtime helpers for executing reducer effects and querying the browser viewport.

use std::rc::Rc;

use desktop_app_contract::AppServices;
use leptos::{logging, spawn_local, Callback};
use platform_host::{DialogService, HostServices};

use crate::{model::WindowRect, reducer::RuntimeEffect};

fn effect_label(effect: &RuntimeEffect) -> String {
    match effect {
        RuntimeEffect::OpenExternalUrl(url) => format!("open external url `{url}`"),
        RuntimeEffect::Navigate(url) => format!("navigation to `{url}`"),
        RuntimeEffect::Reload => "page reload".to_string(),
        RuntimeEffect::Notify { .. } => "notification dispatch".to_string(),
        RuntimeEffect::Log(_) => "log".to_string(),
    }
}

/// Height of the fixed menu bar; windows live below it.
pub const MENU_BAR_HEIGHT_PX: i32 = 20;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    pub fn dialogs(&self) -> Rc<dyn DialogService> {
        self.services.dialogs.clone()
    }

    /// Builds the per-window service bundle handed to mounted apps.
    pub fn app_services(&self, sender: Callback<desktop_app_contract::AppCommand>) -> AppServices {
        AppServices::new(sender, self.dialogs())
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer on the local executor.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        let host = self.clone();
        spawn_local(async move {
            let label = effect_label(&effect);
            if let Err(err) = host.execute(effect).await {
                logging::warn!("{label} failed: {err}");
            }
        });
    }

    /// Runs `effect` against the host services.
    ///
    /// # Errors
    ///
    /// Returns the host service error message; desktop state is never touched.
    pub async fn execute(&self, effect: RuntimeEffect) -> Result<(), String> {
        match effect {
            RuntimeEffect::OpenExternalUrl(url) => self.services.external_urls.open_url(&url).await,
            RuntimeEffect::Navigate(url) => self.services.session.navigate(&url).await,
            RuntimeEffect::Reload => self.services.session.reload().await,
            RuntimeEffect::Notify { title, body } => {
                self.services.notifications.notify(&title, &body).await
            }
            RuntimeEffect::Log(message) => {
                logging::log!("{message}");
                Ok(())
            }
        }
    }

    /// Returns the desktop area below the menu bar.
    pub fn desktop_viewport_rect(&self) -> WindowRect {
        desktop_viewport_rect(MENU_BAR_HEIGHT_PX)
    }
}

fn desktop_viewport_rect(menu_bar_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return WindowRect {
                x: 0,
                y: menu_bar_height_px,
                w: width.max(320),
                h: (height - menu_bar_height_px).max(220),
            };
        }
    }

    WindowRect {
        x: 0,
        y: menu_bar_height_px,
        w: 1024,
        h: 768 - menu_bar_height_px,
    }
}
