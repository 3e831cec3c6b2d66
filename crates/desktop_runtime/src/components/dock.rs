use super::*;
use crate::window_manager::{dock_windows, DockEntry};
use system_ui::{Dock, DockButton};

#[component]
pub(super) fn DesktopDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = create_memo(move |_| runtime.state.with(dock_windows));

    view! {
        <Show when=move || entries.with(|entries| !entries.is_empty()) fallback=|| ()>
            <Dock>
                <For each=move || entries.get() key=|entry| entry.id.clone() let:entry>
                    <DesktopDockButton entry=entry />
                </For>
            </Dock>
        </Show>
    }
}

#[component]
fn DesktopDockButton(entry: DockEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = entry.id;

    view! {
        <DockButton
            title=entry.title
            glyph=entry.content.glyph()
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::RestoreWindow {
                    window_id: window_id.clone(),
                });
            })
        />
    }
}
