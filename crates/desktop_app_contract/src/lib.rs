//! Shared contract types between the desktop window manager runtime and the hosted apps.
//!
//! Apps never see desktop state. They receive an [`AppMountContext`] with their launch
//! parameters and an [`AppServices`] bundle; notifications go back to the runtime as an
//! [`AppCommand`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, View};
use platform_host::DialogService;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Commands emitted by app services to the desktop runtime.
pub enum AppCommand {
    /// Show a user-visible notification.
    Notify {
        /// Notification title.
        title: String,
        /// Notification body.
        body: String,
    },
}

#[derive(Clone, Copy)]
/// Notification service handed to apps.
pub struct NotificationChannel {
    sender: Callback<AppCommand>,
}

impl NotificationChannel {
    /// Asks the runtime to notify the user.
    pub fn notify(&self, title: impl Into<String>, body: impl Into<String>) {
        self.sender.call(AppCommand::Notify {
            title: title.into(),
            body: body.into(),
        });
    }
}

#[derive(Clone)]
/// Runtime service bundle injected into each mounted app.
pub struct AppServices {
    /// User notifications.
    pub notifications: NotificationChannel,
    /// Modal prompts, answered directly by the host.
    pub dialogs: Rc<dyn DialogService>,
}

impl AppServices {
    /// Builds the bundle from the runtime command sender and the host dialog service.
    pub fn new(sender: Callback<AppCommand>, dialogs: Rc<dyn DialogService>) -> Self {
        Self {
            notifications: NotificationChannel { sender },
            dialogs,
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window.
pub struct AppMountContext {
    /// Launch params supplied when the window was opened.
    pub launch_params: Value,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use platform_host::{NoopDialogService, ScriptedDialogService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn services_forward_commands_to_the_runtime_sender() {
        let _ = leptos::create_runtime();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let services = AppServices::new(
            Callback::new(move |command| sink.borrow_mut().push(command)),
            Rc::new(NoopDialogService),
        );

        services.notifications.notify("Music Player", "Cannot play");
        services.notifications.notify("Music Player", "Cannot load");

        assert_eq!(
            *received.borrow(),
            vec![
                AppCommand::Notify {
                    title: "Music Player".to_string(),
                    body: "Cannot play".to_string(),
                },
                AppCommand::Notify {
                    title: "Music Player".to_string(),
                    body: "Cannot load".to_string(),
                },
            ]
        );
    }

    #[test]
    fn dialogs_are_answered_by_the_injected_host() {
        let _ = leptos::create_runtime();
        let services = AppServices::new(
            Callback::new(|_| {}),
            Rc::new(ScriptedDialogService::new([Some("song.mp3".to_string())])),
        );

        assert_eq!(
            block_on(services.dialogs.prompt("Enter URL", "")),
            Some("song.mp3".to_string())
        );
    }
}
