use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::menus::MenuId;

pub const DEFAULT_WINDOW_X: i32 = 100;
pub const DEFAULT_WINDOW_Y: i32 = 100;
pub const DEFAULT_WINDOW_WIDTH: i32 = 500;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;
/// Offset added to every z value when rendering; also the z-index of windows without an entry.
pub const Z_INDEX_BASE: u64 = 100;
/// Height of the window title bar, kept inside the desktop when a drag is committed.
pub const TITLE_BAR_HEIGHT: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hosted by a window. The window manager never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppId {
    About,
    Calculator,
    TextEditor,
    FileBrowser,
    Projects,
    VideoGames,
    Tabletop,
    MusicPlayer,
    Trash,
}

impl AppId {
    pub const ALL: [AppId; 9] = [
        Self::About,
        Self::Calculator,
        Self::TextEditor,
        Self::FileBrowser,
        Self::Projects,
        Self::VideoGames,
        Self::Tabletop,
        Self::MusicPlayer,
        Self::Trash,
    ];

    /// Window title used when an open request carries none.
    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About This Mac",
            Self::Calculator => "Calculator",
            Self::TextEditor => "SimpleText - Read Me",
            Self::FileBrowser => "OS Drive",
            Self::Projects => "Programming Projects",
            Self::VideoGames => "Video Games",
            Self::Tabletop => "Tabletop Gaming",
            Self::MusicPlayer => "Music Player",
            Self::Trash => "Trash",
        }
    }

    /// Stable lowercase name used by `?open=` deep links.
    pub fn slug(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Calculator => "calculator",
            Self::TextEditor => "simpletext",
            Self::FileBrowser => "osdrive",
            Self::Projects => "programming",
            Self::VideoGames => "videogames",
            Self::Tabletop => "tabletop",
            Self::MusicPlayer => "musicplayer",
            Self::Trash => "trash",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.slug() == slug)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::About => "\u{1F5A5}",
            Self::Calculator => "\u{1F5A9}",
            Self::TextEditor => "\u{1F4DD}",
            Self::FileBrowser => "\u{1F4BE}",
            Self::Projects => "\u{1F4C1}",
            Self::VideoGames => "\u{1F3AE}",
            Self::Tabletop => "\u{1F3B2}",
            Self::MusicPlayer => "\u{1F3B5}",
            Self::Trash => "\u{1F5D1}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Moves the rect so its title bar lies inside `viewport`; the size is unchanged.
    pub fn clamped_to(self, viewport: WindowRect) -> Self {
        let max_x = (viewport.x + viewport.w - self.w).max(viewport.x);
        let max_y = (viewport.y + viewport.h - TITLE_BAR_HEIGHT).max(viewport.y);
        Self {
            x: self.x.clamp(viewport.x, max_x),
            y: self.y.clamp(viewport.y, max_y),
            ..self
        }
    }

    pub fn css(self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;max-height:{}px;",
            self.x, self.y, self.w, self.h
        )
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub content: AppId,
    pub launch_params: Value,
    pub bounds: WindowRect,
    pub minimized: bool,
}

/// Single owner of all window-manager state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    /// Open windows in opening order.
    pub windows: Vec<WindowRecord>,
    /// Last z value assigned to each id. Entries outlive their windows.
    pub z_order: BTreeMap<WindowId, u64>,
    /// Highest z value assigned so far.
    pub max_z: u64,
    pub open_menu: Option<MenuId>,
}

impl DesktopState {
    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub(crate) fn window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }

    /// Rendered CSS z-index for `window_id`.
    pub fn z_index_of(&self, window_id: &WindowId) -> u64 {
        self.z_order
            .get(window_id)
            .map_or(Z_INDEX_BASE, |z| Z_INDEX_BASE + z)
    }

    /// Topmost non-minimized window, if any.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| self.z_order.get(&w.id).copied().unwrap_or(0))
            .map(|w| w.id.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    pub pointer_current: PointerPosition,
}

impl DragSession {
    /// Transient position shown while the pointer is held.
    pub fn preview_rect(&self) -> WindowRect {
        self.rect_start.offset(
            self.pointer_current.x - self.pointer_start.x,
            self.pointer_current.y - self.pointer_start.y,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

impl InteractionState {
    pub fn preview_for(&self, window_id: &WindowId) -> Option<WindowRect> {
        self.dragging
            .as_ref()
            .filter(|session| &session.window_id == window_id)
            .map(DragSession::preview_rect)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub id: WindowId,
    pub title: Option<String>,
    pub content: AppId,
    pub bounds: Option<WindowRect>,
    pub launch_params: Value,
}

impl OpenWindowRequest {
    pub fn new(id: impl Into<String>, content: AppId) -> Self {
        Self {
            id: WindowId(id.into()),
            title: None,
            content,
            bounds: None,
            launch_params: Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 20,
        w: 1000,
        h: 700,
    };

    #[test]
    fn clamp_keeps_title_bar_inside_viewport() {
        let dragged = WindowRect {
            x: -80,
            y: 900,
            w: 400,
            h: 300,
        };
        assert_eq!(
            dragged.clamped_to(VIEWPORT),
            WindowRect {
                x: 0,
                y: 700,
                w: 400,
                h: 300,
            }
        );

        let above = dragged.offset(700, -1000);
        assert_eq!(above.clamped_to(VIEWPORT).x, 600);
        assert_eq!(above.clamped_to(VIEWPORT).y, 20);
    }

    #[test]
    fn clamp_pins_oversized_windows_to_left_edge() {
        let wide = WindowRect {
            x: 50,
            y: 40,
            w: 1400,
            h: 300,
        };
        assert_eq!(wide.clamped_to(VIEWPORT).x, 0);
    }

    #[test]
    fn z_index_falls_back_to_base() {
        let mut state = DesktopState::default();
        let id = WindowId::from("about");
        assert_eq!(state.z_index_of(&id), Z_INDEX_BASE);
        state.z_order.insert(id.clone(), 7);
        assert_eq!(state.z_index_of(&id), 107);
    }

    #[test]
    fn app_slugs_round_trip_and_unknown_slugs_are_rejected() {
        for app in AppId::ALL {
            assert_eq!(AppId::from_slug(app.slug()), Some(app));
        }
        assert_eq!(AppId::from_slug("terminal"), None);
    }

    #[test]
    fn preview_rect_applies_pointer_delta() {
        let session = DragSession {
            window_id: WindowId::from("calculator"),
            pointer_start: PointerPosition { x: 10, y: 10 },
            rect_start: WindowRect::default(),
            pointer_current: PointerPosition { x: 35, y: 50 },
        };
        let interaction = InteractionState {
            dragging: Some(session),
        };

        assert_eq!(
            interaction.preview_for(&WindowId::from("calculator")),
            Some(WindowRect::default().offset(25, 40))
        );
        assert_eq!(interaction.preview_for(&WindowId::from("trash")), None);
    }
}
