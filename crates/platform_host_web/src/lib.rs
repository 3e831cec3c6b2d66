//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Each adapter talks to `web_sys::Window` directly. On non-wasm targets the adapters degrade to
//! explicit errors (or cancellation for prompts) so native unit tests can link the crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod dialogs;
pub mod external_url;
pub mod notifications;
pub mod session;

mod interop;

pub use adapters::build_host_services;
pub use dialogs::WebDialogService;
pub use external_url::WebExternalUrlService;
pub use notifications::WebNotificationService;
pub use session::WebSessionService;
