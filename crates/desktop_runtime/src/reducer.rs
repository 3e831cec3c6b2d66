//! Desktop reducer: the single transition point for window-manager, menu and drag state.

use desktop_app_contract::AppCommand;
use serde::{Deserialize, Serialize};

use crate::{
    apps,
    deep_link::DeepLinkState,
    menus::{toggled_menu, MenuCommand, MenuId, ProfileLink},
    model::{
        AppId, DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition,
        WindowId, WindowRect,
    },
    profile::site_profile,
    window_manager,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Actions accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Open a window, or focus it when its id is already open.
    OpenWindow(OpenWindowRequest),
    /// Open the registry window for an app.
    ActivateApp {
        /// App to open.
        app_id: AppId,
    },
    /// Close a window.
    CloseWindow {
        /// Target window.
        window_id: WindowId,
    },
    /// Move a window to the dock.
    MinimizeWindow {
        /// Target window.
        window_id: WindowId,
    },
    /// Bring a window back from the dock and focus it.
    RestoreWindow {
        /// Target window.
        window_id: WindowId,
    },
    /// Raise a window to the top of the stack.
    FocusWindow {
        /// Target window.
        window_id: WindowId,
    },
    /// Start dragging a window title bar.
    BeginMove {
        /// Dragged window.
        window_id: WindowId,
        /// Pointer position when the drag started.
        pointer: PointerPosition,
    },
    /// Update the drag preview.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Commit the drag preview, clamped to the desktop viewport.
    EndMove {
        /// Desktop area below the menu bar.
        viewport: WindowRect,
    },
    /// Click on a menu title.
    ToggleMenu {
        /// Clicked menu.
        menu: MenuId,
    },
    /// Close any open menu.
    CloseMenu,
    /// Run a menu item and close its menu.
    ActivateMenuCommand {
        /// Selected command.
        command: MenuCommand,
    },
    /// Handle a command emitted by a mounted app.
    HandleAppCommand {
        /// Emitted command.
        command: AppCommand,
    },
    /// Open the windows named by a boot deep link.
    ApplyDeepLink {
        /// Parsed deep link.
        deep_link: DeepLinkState,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Side-effect intents emitted by the reducer and executed by the host layer.
pub enum RuntimeEffect {
    /// Open a URL outside the desktop.
    OpenExternalUrl(String),
    /// Navigate the current page (used for `mailto:` links).
    Navigate(String),
    /// Reload the page.
    Reload,
    /// Show a user notification.
    Notify {
        /// Notification title.
        title: String,
        /// Notification body.
        body: String,
    },
    /// Write a line to the console log.
    Log(String),
}

/// Applies a [`DesktopAction`] and returns the side effects it produced.
///
/// Window-manager actions naming windows that are not open leave the state unchanged.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            window_manager::open_window(state, req);
        }
        DesktopAction::ActivateApp { app_id } => {
            window_manager::open_window(state, apps::open_request(app_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
            window_manager::close_window(state, &window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            window_manager::minimize_window(state, &window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            window_manager::restore_window(state, &window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            window_manager::focus_window(state, &window_id);
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            if let Some(window) = state.window(&window_id).filter(|w| !w.minimized) {
                interaction.dragging = Some(DragSession {
                    rect_start: window.bounds,
                    window_id,
                    pointer_start: pointer,
                    pointer_current: pointer,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_mut() {
                session.pointer_current = pointer;
            }
        }
        DesktopAction::EndMove { viewport } => {
            if let Some(session) = interaction.dragging.take() {
                window_manager::move_window(
                    state,
                    &session.window_id,
                    session.preview_rect(),
                    viewport,
                );
            }
        }
        DesktopAction::ToggleMenu { menu } => {
            state.open_menu = toggled_menu(state.open_menu, menu);
        }
        DesktopAction::CloseMenu => {
            state.open_menu = None;
        }
        DesktopAction::ActivateMenuCommand { command } => {
            state.open_menu = None;
            run_menu_command(state, command, &mut effects);
        }
        DesktopAction::HandleAppCommand { command } => match command {
            AppCommand::Notify { title, body } => {
                effects.push(RuntimeEffect::Notify { title, body });
            }
        },
        DesktopAction::ApplyDeepLink { deep_link } => {
            for err in deep_link.rejected {
                effects.push(RuntimeEffect::Log(format!("skipping {err}")));
            }
            for app_id in deep_link.open {
                window_manager::open_window(state, apps::open_request(app_id));
            }
        }
    }
    effects
}

fn run_menu_command(
    state: &mut DesktopState,
    command: MenuCommand,
    effects: &mut Vec<RuntimeEffect>,
) {
    let profile = site_profile();
    match command {
        MenuCommand::OpenApp(app_id) => {
            window_manager::open_window(state, apps::open_request(app_id));
        }
        MenuCommand::ControlPanels => effects.push(RuntimeEffect::Log("Control Panels".to_string())),
        MenuCommand::Restart => effects.push(RuntimeEffect::Reload),
        MenuCommand::ShutDown => effects.push(RuntimeEffect::Log("Goodbye!".to_string())),
        MenuCommand::OpenLink(ProfileLink::GitHub) => {
            effects.push(RuntimeEffect::OpenExternalUrl(profile.links.github.clone()));
        }
        MenuCommand::OpenLink(ProfileLink::LinkedIn) => {
            effects.push(RuntimeEffect::OpenExternalUrl(
                profile.links.linkedin.clone(),
            ));
        }
        MenuCommand::OpenLink(ProfileLink::Email) => {
            effects.push(RuntimeEffect::Navigate(profile.mailto_url()));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::deep_link::DeepLinkError;

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        window_id: &str,
        content: AppId,
    ) -> WindowId {
        let effects = reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(window_id, content)),
        );
        assert!(effects.is_empty());
        WindowId::from(window_id)
    }

    fn z(state: &DesktopState, window_id: &WindowId) -> u64 {
        state.z_order.get(window_id).copied().unwrap_or_default()
    }

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 20,
        w: 1000,
        h: 700,
    };

    #[test]
    fn focus_minimize_restore_through_actions() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a", AppId::About);
        let b = open(&mut state, &mut interaction, "b", AppId::Trash);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: a.clone(),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: b.clone(),
            },
        );
        assert_eq!(state.focused_window_id(), Some(a.clone()));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow {
                window_id: b.clone(),
            },
        );
        assert_eq!(z(&state, &a), 3);
        assert_eq!(z(&state, &b), 4);
        assert_eq!(state.focused_window_id(), Some(b));
    }

    #[test]
    fn closing_unknown_window_changes_nothing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "a", AppId::About);
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: WindowId::from("ghost"),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn activate_app_uses_registry_window_id() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateApp {
                app_id: AppId::FileBrowser,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateApp {
                app_id: AppId::FileBrowser,
            },
        );

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].id, WindowId::from("osdrive"));
        assert_eq!(state.windows[0].title, "OS Drive");
        assert_eq!(z(&state, &WindowId::from("osdrive")), 2);
    }

    #[test]
    fn drag_previews_without_touching_state_and_commits_clamped_on_release() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a", AppId::Trash);
        let b = open(&mut state, &mut interaction, "b", AppId::About);
        let original = state.window(&a).expect("a").bounds;
        let z_before = state.z_order.clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );

        assert_eq!(state.window(&a).expect("a").bounds, original);
        assert_eq!(interaction.preview_for(&a), Some(original.offset(25, 40)));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: -900, y: -900 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove { viewport: VIEWPORT },
        );

        let moved = state.window(&a).expect("a").bounds;
        assert_eq!((moved.x, moved.y), (0, 20));
        assert_eq!((moved.w, moved.h), (original.w, original.h));
        assert_eq!(interaction.dragging, None);
        assert_eq!(state.z_order, z_before);
        assert_eq!(state.focused_window_id(), Some(b));
    }

    #[test]
    fn end_move_without_session_is_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "a", AppId::Trash);
        let before = state.clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove { viewport: VIEWPORT },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn closing_dragged_window_drops_drag_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a", AppId::Trash);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: PointerPosition::default(),
            },
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: a },
        );

        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn menu_toggle_and_command_close_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuId::System,
            },
        );
        assert_eq!(state.open_menu, Some(MenuId::System));

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateMenuCommand {
                command: MenuCommand::OpenApp(AppId::About),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.open_menu, None);
        assert_eq!(state.windows[0].id, WindowId::from("about"));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuId::Links,
            },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::CloseMenu);
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn system_and_link_commands_emit_host_effects() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let mut run = |command| {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::ActivateMenuCommand { command },
            )
        };
        let profile = site_profile();

        assert_eq!(
            run(MenuCommand::ControlPanels),
            vec![RuntimeEffect::Log("Control Panels".to_string())]
        );
        assert_eq!(run(MenuCommand::Restart), vec![RuntimeEffect::Reload]);
        assert_eq!(
            run(MenuCommand::ShutDown),
            vec![RuntimeEffect::Log("Goodbye!".to_string())]
        );
        assert_eq!(
            run(MenuCommand::OpenLink(ProfileLink::GitHub)),
            vec![RuntimeEffect::OpenExternalUrl(profile.links.github.clone())]
        );
        assert_eq!(
            run(MenuCommand::OpenLink(ProfileLink::Email)),
            vec![RuntimeEffect::Navigate(profile.mailto_url())]
        );
    }

    #[test]
    fn app_commands_route_to_host_effects() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                command: AppCommand::Notify {
                    title: "Music Player".to_string(),
                    body: "Playback failed".to_string(),
                },
            },
        );

        assert_eq!(
            effects,
            vec![RuntimeEffect::Notify {
                title: "Music Player".to_string(),
                body: "Playback failed".to_string(),
            }]
        );
    }

    #[test]
    fn deep_link_opens_known_apps_and_logs_skipped_targets() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyDeepLink {
                deep_link: DeepLinkState {
                    open: vec![AppId::Calculator, AppId::Trash],
                    rejected: vec![DeepLinkError::UnknownApp("paint".to_string())],
                },
            },
        );

        assert_eq!(
            effects,
            vec![RuntimeEffect::Log(
                "skipping unknown app `paint` in deep link".to_string()
            )]
        );
        let ids: Vec<_> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["calculator", "trash"]);
        assert_eq!(state.focused_window_id(), Some(WindowId::from("trash")));
    }
}
