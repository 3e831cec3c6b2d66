//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menu_bar;
mod panels;
mod window;

use leptos::*;
use system_ui::{DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer};

pub use self::panels::{AboutPanel, TrashPanel};
use self::{dock::DesktopDock, menu_bar::DesktopMenuBar, window::DesktopWindow};

use crate::{
    apps,
    model::{AppId, DesktopState, PointerPosition},
    reducer::DesktopAction,
    window_manager::floating_windows,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Action for a press that reached the desktop root outside the menu bar.
fn outside_press_action(desktop: &DesktopState) -> Option<DesktopAction> {
    desktop.open_menu.map(|_| DesktopAction::CloseMenu)
}

fn icon_style(position: PointerPosition) -> String {
    format!("left:{}px;top:{}px;", position.x, position.y)
}

#[component]
/// Renders the full desktop shell UI: menu bar, desktop icons, floating windows and the dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let selected_icon = create_rw_signal(None::<AppId>);

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    let on_pointer_end = Callback::new(move |_: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::EndMove {
                viewport: runtime.host.get_value().desktop_viewport_rect(),
            });
        }
    });
    let on_desktop_mousedown = Callback::new(move |_| {
        selected_icon.set(None);
        if let Some(action) = state.with_untracked(outside_press_action) {
            runtime.dispatch_action(action);
        }
    });

    let floating_ids = create_memo(move |_| {
        state.with(|desktop| {
            floating_windows(desktop)
                .into_iter()
                .map(|window| window.id)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
            on_mousedown=on_desktop_mousedown
        >
            <DesktopMenuBar />

            <DesktopIconGrid>
                <For
                    each=apps::desktop_icon_apps
                    key=|app| app.window_id
                    let:app
                >
                    {{
                        let app_id = app.app_id;
                        let style = app.desktop_icon.map(icon_style);
                        view! {
                            <DesktopIconButton
                                label=app.label
                                glyph=app_id.glyph()
                                style=style.unwrap_or_default()
                                selected=Signal::derive(move || selected_icon.get() == Some(app_id))
                                on_click=Callback::new(move |_| selected_icon.set(Some(app_id)))
                                on_dblclick=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ActivateApp { app_id });
                                })
                            />
                        }
                    }}
                </For>
            </DesktopIconGrid>

            <DesktopWindowLayer>
                <For each=move || floating_ids.get() key=|id| id.clone() let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </DesktopWindowLayer>

            <DesktopDock />
        </DesktopRoot>
    }
}
