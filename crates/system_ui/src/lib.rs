//! Shared UI primitive library for the classic desktop shell and its applications.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the desktop stylesheet. Apps compose these primitives instead of emitting ad hoc chrome markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonVariant, CheckboxField, DataTable, DesktopIconButton, DesktopIconGrid,
    DesktopRoot, DesktopWindowLayer, Dock, DockButton, EmptyState, GroupBox, LayoutGap,
    MenuBar, MenuItem, MenuSeparator, MenuSurface, MenuTitle, ProgressBar, RangeField, StatusBar,
    StatusBarItem, Tab, TabList, TextArea, ToolBar, Tree, TreeItem, WindowBody,
    WindowControlButton, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, CheckboxField, DataTable, EmptyState, GroupBox, LayoutGap,
        ProgressBar, RangeField, StatusBar, StatusBarItem, Tab, TabList, TextArea, ToolBar, Tree,
        TreeItem,
    };
}
