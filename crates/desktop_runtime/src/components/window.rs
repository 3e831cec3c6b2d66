use super::*;
use crate::model::WindowId;
use system_ui::{WindowBody, WindowControlButton, WindowFrame, WindowTitle, WindowTitleBar};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(record) = runtime
        .state
        .with_untracked(|desktop| desktop.window(&window_id).cloned())
    else {
        return ().into_view();
    };

    let initial_bounds = record.bounds;
    let style = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            let bounds = runtime
                .interaction
                .with(|ui| ui.preview_for(&window_id))
                .or_else(|| {
                    runtime
                        .state
                        .with(|desktop| desktop.window(&window_id).map(|w| w.bounds))
                })
                .unwrap_or(initial_bounds);
            let z_index = runtime.state.with(|desktop| desktop.z_index_of(&window_id));
            format!("{}z-index:{z_index};", bounds.css())
        })
    };
    let focused = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            runtime
                .state
                .with(|desktop| desktop.focused_window_id().as_ref() == Some(&window_id))
        })
    };
    let dragging = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            runtime.interaction.with(|ui| {
                ui.dragging
                    .as_ref()
                    .is_some_and(|session| session.window_id == window_id)
            })
        })
    };

    let focus = {
        let window_id = window_id.clone();
        Callback::new(move |_: web_sys::PointerEvent| {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: window_id.clone(),
            });
        })
    };
    let begin_move = {
        let window_id = window_id.clone();
        Callback::new(move |ev: web_sys::PointerEvent| {
            if ev.pointer_type() == "mouse" && ev.button() != 0 {
                return;
            }
            if ev.pointer_type() != "mouse" && !ev.is_primary() {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        })
    };
    let close = {
        let window_id = window_id.clone();
        Callback::new(move |_| {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            });
        })
    };
    let minimize = {
        let window_id = window_id.clone();
        Callback::new(move |_| {
            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                window_id: window_id.clone(),
            });
        })
    };

    let services = runtime
        .host
        .get_value()
        .app_services(Callback::new(move |command| {
            runtime.dispatch_action(DesktopAction::HandleAppCommand { command });
        }));
    let contents = apps::mount_window_contents(&record, services);
    let title = record.title.clone();

    view! {
        <WindowFrame
            style=style
            aria_label=title.clone()
            focused=focused
            dragging=dragging
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move>
                <WindowControlButton
                    ui_slot="close"
                    aria_label="Close".to_string()
                    on_click=close
                />
                <WindowTitle>{title}</WindowTitle>
                <WindowControlButton
                    ui_slot="collapse"
                    aria_label="Minimize".to_string()
                    on_click=minimize
                />
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
        </WindowFrame>
    }
    .into_view()
}
