//! Application registry: window ids, default placement, desktop icons and mount functions.

use desktop_app_calculator::CalculatorApp;
use desktop_app_contract::{AppModule, AppMountContext, AppServices};
use desktop_app_file_browser::FileBrowserApp;
use desktop_app_music_player::MusicPlayerApp;
use desktop_app_showcase::{ProjectsApp, TabletopApp, VideoGamesApp};
use desktop_app_text_editor::TextEditorApp;
use leptos::*;

use crate::{
    components::{AboutPanel, TrashPanel},
    model::{AppId, OpenWindowRequest, PointerPosition, WindowRecord, WindowRect},
};

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub app_id: AppId,
    /// De-duplication key of the app's window.
    pub window_id: &'static str,
    /// Desktop icon label.
    pub label: &'static str,
    pub default_bounds: Option<WindowRect>,
    /// Fixed desktop icon position, for apps shown on the desktop.
    pub desktop_icon: Option<PointerPosition>,
    pub module: AppModule,
}

const fn bounds(x: i32, y: i32, w: i32, h: i32) -> Option<WindowRect> {
    Some(WindowRect { x, y, w, h })
}

fn mount_about(_: AppMountContext) -> View {
    view! { <AboutPanel /> }.into_view()
}

fn mount_calculator(_: AppMountContext) -> View {
    view! { <CalculatorApp /> }.into_view()
}

fn mount_text_editor(_: AppMountContext) -> View {
    view! { <TextEditorApp /> }.into_view()
}

fn mount_file_browser(context: AppMountContext) -> View {
    view! { <FileBrowserApp launch_params=context.launch_params /> }.into_view()
}

fn mount_projects(_: AppMountContext) -> View {
    view! { <ProjectsApp /> }.into_view()
}

fn mount_video_games(_: AppMountContext) -> View {
    view! { <VideoGamesApp /> }.into_view()
}

fn mount_tabletop(_: AppMountContext) -> View {
    view! { <TabletopApp /> }.into_view()
}

fn mount_music_player(context: AppMountContext) -> View {
    view! {
        <MusicPlayerApp services=context.services launch_params=context.launch_params />
    }
    .into_view()
}

fn mount_trash(_: AppMountContext) -> View {
    view! { <TrashPanel /> }.into_view()
}

static APP_REGISTRY: [AppDescriptor; 9] = [
    AppDescriptor {
        app_id: AppId::About,
        window_id: "about",
        label: "About This Mac",
        default_bounds: bounds(150, 100, 400, 350),
        desktop_icon: None,
        module: AppModule::new(mount_about),
    },
    AppDescriptor {
        app_id: AppId::Calculator,
        window_id: "calculator",
        label: "Calculator",
        default_bounds: bounds(200, 160, 280, 350),
        desktop_icon: None,
        module: AppModule::new(mount_calculator),
    },
    AppDescriptor {
        app_id: AppId::TextEditor,
        window_id: "simpletext",
        label: "SimpleText",
        default_bounds: bounds(180, 140, 500, 400),
        desktop_icon: None,
        module: AppModule::new(mount_text_editor),
    },
    AppDescriptor {
        app_id: AppId::FileBrowser,
        window_id: "osdrive",
        label: "OS Drive",
        default_bounds: bounds(160, 120, 400, 350),
        desktop_icon: Some(PointerPosition { x: 20, y: 40 }),
        module: AppModule::new(mount_file_browser),
    },
    AppDescriptor {
        app_id: AppId::Projects,
        window_id: "programming",
        label: "Programming",
        default_bounds: bounds(100, 80, 500, 400),
        desktop_icon: None,
        module: AppModule::new(mount_projects),
    },
    AppDescriptor {
        app_id: AppId::VideoGames,
        window_id: "videogames",
        label: "Video Games",
        default_bounds: bounds(140, 120, 550, 500),
        desktop_icon: None,
        module: AppModule::new(mount_video_games),
    },
    AppDescriptor {
        app_id: AppId::Tabletop,
        window_id: "tabletop",
        label: "Tabletop",
        default_bounds: bounds(120, 100, 480, 450),
        desktop_icon: None,
        module: AppModule::new(mount_tabletop),
    },
    AppDescriptor {
        app_id: AppId::MusicPlayer,
        window_id: "musicplayer",
        label: "Music Player",
        default_bounds: None,
        desktop_icon: None,
        module: AppModule::new(mount_music_player),
    },
    AppDescriptor {
        app_id: AppId::Trash,
        window_id: "trash",
        label: "Trash",
        default_bounds: bounds(180, 140, 350, 280),
        desktop_icon: Some(PointerPosition { x: 20, y: 140 }),
        module: AppModule::new(mount_trash),
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    // Registry order follows `AppId::ALL`.
    match app_id {
        AppId::About => &APP_REGISTRY[0],
        AppId::Calculator => &APP_REGISTRY[1],
        AppId::TextEditor => &APP_REGISTRY[2],
        AppId::FileBrowser => &APP_REGISTRY[3],
        AppId::Projects => &APP_REGISTRY[4],
        AppId::VideoGames => &APP_REGISTRY[5],
        AppId::Tabletop => &APP_REGISTRY[6],
        AppId::MusicPlayer => &APP_REGISTRY[7],
        AppId::Trash => &APP_REGISTRY[8],
    }
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.desktop_icon.is_some())
        .collect()
}

pub fn default_bounds(app_id: AppId) -> Option<WindowRect> {
    app_descriptor(app_id).default_bounds
}

/// Open request for the app's single registry window.
pub fn open_request(app_id: AppId) -> OpenWindowRequest {
    OpenWindowRequest::new(app_descriptor(app_id).window_id, app_id)
}

/// Mounts the app view hosted by `window`.
pub fn mount_window_contents(window: &WindowRecord, services: AppServices) -> View {
    app_descriptor(window.content).module.mount(AppMountContext {
        launch_params: window.launch_params.clone(),
        services,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_follows_app_order_with_unique_window_ids() {
        let apps: Vec<_> = app_registry().iter().map(|entry| entry.app_id).collect();
        assert_eq!(apps, AppId::ALL.to_vec());
        for app in AppId::ALL {
            assert_eq!(app_descriptor(app).app_id, app);
        }

        let ids: BTreeSet<_> = app_registry().iter().map(|entry| entry.window_id).collect();
        assert_eq!(ids.len(), app_registry().len());
    }

    #[test]
    fn desktop_shows_drive_and_trash_icons() {
        let icons: Vec<_> = desktop_icon_apps()
            .into_iter()
            .map(|entry| (entry.label, entry.window_id))
            .collect();
        assert_eq!(icons, vec![("OS Drive", "osdrive"), ("Trash", "trash")]);
    }

    #[test]
    fn open_request_targets_registry_window_without_overrides() {
        let req = open_request(AppId::TextEditor);
        assert_eq!(req.id.as_str(), "simpletext");
        assert_eq!(req.content, AppId::TextEditor);
        assert_eq!(req.title, None);
        assert_eq!(req.bounds, None);
    }
}
