//! Classic desktop runtime: window manager state, reducer, effect execution and shell UI.

pub mod apps;
pub mod components;
pub mod deep_link;
mod effect_executor;
pub mod host;
pub mod menus;
pub mod model;
pub mod profile;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use deep_link::{parse_open_param, DeepLinkError, DeepLinkState};
pub use model::*;
pub use profile::{site_profile, ProfileError, SiteProfile};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use window_manager::{dock_windows, floating_windows, DockEntry, FloatingWindow};
