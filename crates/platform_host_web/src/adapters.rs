use std::rc::Rc;

use platform_host::HostServices;

use crate::{WebDialogService, WebExternalUrlService, WebNotificationService, WebSessionService};

/// Builds the browser host-service bundle consumed by the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        external_urls: Rc::new(WebExternalUrlService),
        notifications: Rc::new(WebNotificationService),
        dialogs: Rc::new(WebDialogService),
        session: Rc::new(WebSessionService),
    }
}
