//! Window-manager operations over [`DesktopState`] and the pure render projection.
//!
//! Every operation is total: ids that are not open are ignored. Each open of a new id and each
//! focus takes a fresh z value from the monotonically increasing `max_z` counter.

use crate::{
    apps,
    model::{AppId, DesktopState, OpenWindowRequest, WindowId, WindowRecord, WindowRect},
};

fn raise(state: &mut DesktopState, window_id: &WindowId) {
    state.max_z += 1;
    state.z_order.insert(window_id.clone(), state.max_z);
}

/// Opens a window for `req`, or focuses the already-open window with the same id.
///
/// The title, content and bounds of a request for an open id are discarded. Returns `true` when
/// a new window was appended.
pub fn open_window(state: &mut DesktopState, req: OpenWindowRequest) -> bool {
    if state.window(&req.id).is_some() {
        focus_window(state, &req.id);
        return false;
    }

    let bounds = req
        .bounds
        .or_else(|| apps::default_bounds(req.content))
        .unwrap_or_default();
    let record = WindowRecord {
        title: req.title.unwrap_or_else(|| req.content.title().to_string()),
        id: req.id,
        content: req.content,
        launch_params: req.launch_params,
        bounds,
        minimized: false,
    };
    raise(state, &record.id);
    state.windows.push(record);
    true
}

/// Removes the window. Its z entry is left in place.
pub fn close_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| &w.id != window_id);
    state.windows.len() != before
}

pub fn minimize_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    match state.window_mut(window_id) {
        Some(window) => {
            window.minimized = true;
            true
        }
        None => false,
    }
}

/// Un-minimizes and focuses the window.
pub fn restore_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    match state.window_mut(window_id) {
        Some(window) => window.minimized = false,
        None => return false,
    }
    raise(state, window_id);
    true
}

/// Raises the window above all others, even when it is already topmost.
pub fn focus_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    if state.window(window_id).is_none() {
        return false;
    }
    raise(state, window_id);
    true
}

/// Commits a moved window position, clamped to `viewport`.
pub fn move_window(
    state: &mut DesktopState,
    window_id: &WindowId,
    rect: WindowRect,
    viewport: WindowRect,
) -> bool {
    match state.window_mut(window_id) {
        Some(window) => {
            window.bounds = rect.clamped_to(viewport);
            true
        }
        None => false,
    }
}

/// Re-ranks z values to `1..=n` preserving relative order and drops stale entries.
pub fn renormalize_z_order(state: &mut DesktopState) {
    let mut ranked: Vec<(u64, WindowId)> = state
        .windows
        .iter()
        .filter_map(|w| state.z_order.get(&w.id).map(|z| (*z, w.id.clone())))
        .collect();
    ranked.sort();

    state.z_order.clear();
    for (rank, (_, window_id)) in ranked.into_iter().enumerate() {
        state.z_order.insert(window_id, rank as u64 + 1);
    }
    state.max_z = state.z_order.len() as u64;
}

#[derive(Debug, Clone, PartialEq)]
/// Window drawn on the desktop surface.
pub struct FloatingWindow {
    pub id: WindowId,
    pub title: String,
    pub content: AppId,
    pub bounds: WindowRect,
    pub z_index: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Minimized window shown in the dock.
pub struct DockEntry {
    pub id: WindowId,
    pub title: String,
    pub content: AppId,
}

/// Non-minimized windows in list order with their rendered z-index.
pub fn floating_windows(state: &DesktopState) -> Vec<FloatingWindow> {
    state
        .windows
        .iter()
        .filter(|w| !w.minimized)
        .map(|w| FloatingWindow {
            id: w.id.clone(),
            title: w.title.clone(),
            content: w.content,
            bounds: w.bounds,
            z_index: state.z_index_of(&w.id),
        })
        .collect()
}

/// Minimized windows in list order.
pub fn dock_windows(state: &DesktopState) -> Vec<DockEntry> {
    state
        .windows
        .iter()
        .filter(|w| w.minimized)
        .map(|w| DockEntry {
            id: w.id.clone(),
            title: w.title.clone(),
            content: w.content,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    fn id(value: &str) -> WindowId {
        WindowId::from(value)
    }

    fn open(state: &mut DesktopState, window_id: &str, content: AppId) {
        open_window(state, OpenWindowRequest::new(window_id, content));
    }

    fn z(state: &DesktopState, window_id: &str) -> Option<u64> {
        state.z_order.get(&id(window_id)).copied()
    }

    #[test]
    fn open_assigns_increasing_z_and_appends_in_order() {
        let mut state = DesktopState::default();
        open(&mut state, "a", AppId::Calculator);
        open(&mut state, "b", AppId::Trash);

        assert_eq!(z(&state, "a"), Some(1));
        assert_eq!(z(&state, "b"), Some(2));
        assert_eq!(state.max_z, 2);
        let ids: Vec<_> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(state.focused_window_id(), Some(id("b")));
    }

    #[test]
    fn focus_minimize_restore_scenario() {
        let mut state = DesktopState::default();
        open(&mut state, "a", AppId::Calculator);
        open(&mut state, "b", AppId::Trash);

        assert!(focus_window(&mut state, &id("a")));
        assert_eq!(z(&state, "a"), Some(3));

        assert!(minimize_window(&mut state, &id("b")));
        assert_eq!(z(&state, "b"), Some(2));
        assert_eq!(floating_windows(&state).len(), 1);
        assert_eq!(
            dock_windows(&state),
            vec![DockEntry {
                id: id("b"),
                title: "Trash".to_string(),
                content: AppId::Trash,
            }]
        );

        assert!(restore_window(&mut state, &id("b")));
        assert_eq!(z(&state, "b"), Some(4));
        assert_eq!(state.max_z, 4);
        assert!(dock_windows(&state).is_empty());
        assert_eq!(state.focused_window_id(), Some(id("b")));
    }

    #[test]
    fn duplicate_open_focuses_and_keeps_first_payload() {
        let mut state = DesktopState::default();
        let mut first = OpenWindowRequest::new("x", AppId::TextEditor);
        first.title = Some("First".to_string());
        open_window(&mut state, first);
        open(&mut state, "y", AppId::Trash);

        let mut second = OpenWindowRequest::new("x", AppId::Calculator);
        second.title = Some("Second".to_string());
        second.bounds = Some(WindowRect {
            x: 1,
            y: 1,
            w: 10,
            h: 10,
        });
        assert!(!open_window(&mut state, second));

        assert_eq!(state.windows.len(), 2);
        let window = state.window(&id("x")).expect("x is open");
        assert_eq!(window.title, "First");
        assert_eq!(window.content, AppId::TextEditor);
        assert_eq!(z(&state, "x"), Some(3));
    }

    #[test]
    fn focus_always_takes_a_fresh_value_even_when_topmost() {
        let mut state = DesktopState::default();
        open(&mut state, "a", AppId::About);

        focus_window(&mut state, &id("a"));
        focus_window(&mut state, &id("a"));

        assert_eq!(z(&state, "a"), Some(3));
        assert_eq!(state.max_z, 3);
    }

    #[test]
    fn operations_on_unknown_ids_are_noops() {
        let mut state = DesktopState::default();
        open(&mut state, "a", AppId::About);
        let before = state.clone();

        assert!(!close_window(&mut state, &id("ghost")));
        assert!(!minimize_window(&mut state, &id("ghost")));
        assert!(!restore_window(&mut state, &id("ghost")));
        assert!(!focus_window(&mut state, &id("ghost")));

        assert_eq!(state, before);
    }

    #[test]
    fn close_keeps_stale_z_entry_and_reopen_gets_fresh_value() {
        let mut state = DesktopState::default();
        open(&mut state, "a", AppId::About);
        open(&mut state, "b", AppId::Trash);

        assert!(close_window(&mut state, &id("a")));
        assert!(state.window(&id("a")).is_none());
        assert_eq!(z(&state, "a"), Some(1));

        open(&mut state, "a", AppId::About);
        assert_eq!(z(&state, "a"), Some(3));
        let ids: Vec<_> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn minimize_keeps_z_and_restore_of_visible_window_still_raises() {
        let mut state = DesktopState::default();
        open(&mut state, "a", AppId::About);
        open(&mut state, "b", AppId::Trash);

        minimize_window(&mut state, &id("b"));
        minimize_window(&mut state, &id("b"));
        assert_eq!(z(&state, "b"), Some(2));
        assert_eq!(state.focused_window_id(), Some(id("a")));

        restore_window(&mut state, &id("a"));
        assert_eq!(z(&state, "a"), Some(3));
    }

    #[test]
    fn missing_title_and_bounds_fall_back_to_app_then_fixed_defaults() {
        let mut state = DesktopState::default();
        open(&mut state, "calc", AppId::Calculator);
        open(&mut state, "music", AppId::MusicPlayer);

        let calc = state.window(&id("calc")).expect("calc");
        assert_eq!(calc.title, "Calculator");
        assert_eq!(
            calc.bounds,
            WindowRect {
                x: 200,
                y: 160,
                w: 280,
                h: 350,
            }
        );

        let music = state.window(&id("music")).expect("music");
        assert_eq!(music.title, "Music Player");
        assert_eq!(
            music.bounds,
            WindowRect {
                x: 100,
                y: 100,
                w: DEFAULT_WINDOW_WIDTH,
                h: DEFAULT_WINDOW_HEIGHT,
            }
        );
    }

    #[test]
    fn floating_set_keeps_list_order_and_renders_base_offset() {
        let mut state = DesktopState::default();
        open(&mut state, "a", AppId::About);
        open(&mut state, "b", AppId::Trash);
        open(&mut state, "c", AppId::Tabletop);
        focus_window(&mut state, &id("a"));
        minimize_window(&mut state, &id("b"));

        let floating: Vec<_> = floating_windows(&state)
            .into_iter()
            .map(|w| (w.id.0, w.z_index))
            .collect();
        assert_eq!(
            floating,
            vec![("a".to_string(), 104), ("c".to_string(), 103)]
        );
    }

    #[test]
    fn move_window_clamps_into_viewport() {
        let mut state = DesktopState::default();
        open(&mut state, "a", AppId::Trash);
        let viewport = WindowRect {
            x: 0,
            y: 20,
            w: 800,
            h: 600,
        };

        assert!(move_window(
            &mut state,
            &id("a"),
            WindowRect {
                x: -50,
                y: 5,
                w: 350,
                h: 280,
            },
            viewport,
        ));
        let bounds = state.window(&id("a")).expect("a").bounds;
        assert_eq!((bounds.x, bounds.y), (0, 20));
        assert!(!move_window(&mut state, &id("ghost"), bounds, viewport));
    }

    #[test]
    fn renormalize_preserves_relative_order_and_drops_stale_entries() {
        let mut state = DesktopState::default();
        open(&mut state, "a", AppId::About);
        open(&mut state, "b", AppId::Trash);
        open(&mut state, "c", AppId::Calculator);
        focus_window(&mut state, &id("a"));
        focus_window(&mut state, &id("b"));
        close_window(&mut state, &id("c"));

        renormalize_z_order(&mut state);

        assert_eq!(z(&state, "a"), Some(1));
        assert_eq!(z(&state, "b"), Some(2));
        assert_eq!(z(&state, "c"), None);
        assert_eq!(state.max_z, 2);
        assert_eq!(state.focused_window_id(), Some(id("b")));
    }
}
