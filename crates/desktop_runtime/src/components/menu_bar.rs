use super::*;
use crate::menus::{menu_bar, MenuEntry, MenuSpec};
use system_ui::{MenuBar, MenuItem, MenuSeparator, MenuSurface, MenuTitle};

#[component]
pub(super) fn DesktopMenuBar() -> impl IntoView {
    view! {
        <MenuBar aria_label="Menu bar">
            <span class="desktop-menubar-logo" aria-hidden="true">"\u{1F34E}"</span>
            {menu_bar()
                .iter()
                .map(|menu| view! { <DesktopMenu menu=menu /> })
                .collect_view()}
        </MenuBar>
    }
}

#[component]
fn DesktopMenu(menu: &'static MenuSpec) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let menu_id = menu.id;
    let open = Signal::derive(move || runtime.state.with(|desktop| desktop.open_menu == Some(menu_id)));

    view! {
        <div class="desktop-menu" data-ui-slot="menu">
            <MenuTitle
                id=menu_id.dom_id()
                open=open
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(DesktopAction::ToggleMenu { menu: menu_id });
                })
            >
                {menu.title}
            </MenuTitle>
            <Show when=move || open.get() fallback=|| ()>
                <MenuSurface
                    id=format!("{}-dropdown", menu_id.dom_id())
                    aria_label=menu.title
                >
                    {menu
                        .entries
                        .iter()
                        .map(|entry| match *entry {
                            MenuEntry::Command { label, command } => {
                                view! {
                                    <MenuItem on_click=Callback::new(move |_| {
                                        runtime
                                            .dispatch_action(DesktopAction::ActivateMenuCommand {
                                                command,
                                            });
                                    })>
                                        {label}
                                    </MenuItem>
                                }
                                    .into_view()
                            }
                            MenuEntry::Separator => view! { <MenuSeparator /> }.into_view(),
                        })
                        .collect_view()}
                </MenuSurface>
            </Show>
        </div>
    }
}
