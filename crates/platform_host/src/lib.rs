//! Typed host-service contracts shared by the desktop runtime, apps, and browser adapters.
//!
//! Every service is an object-safe trait returning a boxed local future so the runtime can hold
//! `Rc<dyn ...>` handles and drive them on the single-threaded UI executor. Concrete browser
//! adapters live in `platform_host_web`; this crate only ships no-op and in-memory adapters.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dialogs;
pub mod external_url;
pub mod host;
pub mod notifications;
pub mod session;

pub use dialogs::{DialogFuture, DialogService, NoopDialogService, ScriptedDialogService};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::HostServices;
pub use notifications::{
    MemoryNotificationService, NoopNotificationService, NotificationFuture, NotificationRecord,
    NotificationService,
};
pub use session::{
    MemorySessionService, NoopSessionService, SessionFuture, SessionRequest, SessionService,
};
