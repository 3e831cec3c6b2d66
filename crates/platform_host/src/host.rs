//! Shared host-service bundle injected into the desktop runtime by the entry layer.

use std::rc::Rc;

use crate::{
    DialogService, ExternalUrlService, NoopDialogService, NoopExternalUrlService,
    NoopNotificationService, NoopSessionService, NotificationService, SessionService,
};

#[derive(Clone)]
/// Host services used by the desktop runtime and mounted apps.
pub struct HostServices {
    /// External URL opener.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// User-visible notifications.
    pub notifications: Rc<dyn NotificationService>,
    /// Modal prompts.
    pub dialogs: Rc<dyn DialogService>,
    /// Page reload and navigation.
    pub session: Rc<dyn SessionService>,
}

impl HostServices {
    /// Builds a bundle where every service is a no-op.
    pub fn noop() -> Self {
        Self {
            external_urls: Rc::new(NoopExternalUrlService),
            notifications: Rc::new(NoopNotificationService),
            dialogs: Rc::new(NoopDialogService),
            session: Rc::new(NoopSessionService),
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::noop()
    }
}
