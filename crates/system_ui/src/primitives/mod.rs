//! Shared shell, menu, control, and data-display primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod data_display;
mod menus;
mod shell;

pub use controls::{Button, CheckboxField, ProgressBar, RangeField, TextArea};
pub use data_display::{
    DataTable, EmptyState, GroupBox, StatusBar, StatusBarItem, Tab, TabList, ToolBar, Tree,
    TreeItem,
};
pub use menus::{MenuBar, MenuItem, MenuSeparator, MenuSurface, MenuTitle};
pub use shell::{
    DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Dock, DockButton,
    WindowBody, WindowControlButton, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard push button.
    #[default]
    Standard,
    /// Default button drawn with the heavy outline ring.
    Default,
    /// Borderless button used inside chrome (menus, tabs, title bars).
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Default => "default",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    #[default]
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn range_percent(value: f64, min: f64, max: f64) -> f64 {
    let span = (max - min).max(f64::EPSILON);
    if !value.is_finite() {
        return 0.0;
    }
    (((value - min) / span) * 100.0).clamp(0.0, 100.0)
}
