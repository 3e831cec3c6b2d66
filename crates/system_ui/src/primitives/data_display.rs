use super::*;

#[component]
/// Shared toolbar row.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared status bar primitive.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared inline statusbar item wrapper.
pub fn StatusBarItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-statusbar-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar-item"
        >
            {children()}
        </span>
    }
}

#[component]
/// Etched group box with a caption.
pub fn GroupBox(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] caption: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <fieldset
            class=merge_layout_class("ui-group-box", layout_class)
            data-ui-primitive="true"
            data-ui-kind="group-box"
        >
            {caption.map(|caption| view! { <legend>{caption}</legend> })}
            {children()}
        </fieldset>
    }
}

#[component]
/// Shared table primitive.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <table
            class=merge_layout_class("ui-data-table", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="data-table"
        >
            {children()}
        </table>
    }
}

#[component]
/// Shared tree container.
pub fn Tree(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-tree", layout_class)
            role="tree"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tree"
        >
            {children()}
        </ul>
    }
}

#[component]
/// Shared tree row. `depth` drives the indentation.
pub fn TreeItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] depth: usize,
    #[prop(optional, into)] expanded: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_branch = expanded.is_some();
    view! {
        <li
            class=merge_layout_class("ui-tree-item", layout_class)
            role="treeitem"
            style=format!("padding-left:{}px;", depth * 16)
            aria-expanded=move || expanded.map(|expanded| bool_token(expanded.get()))
            data-ui-primitive="true"
            data-ui-kind="tree-item"
            data-ui-branch=bool_token(is_branch)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </li>
    }
}

#[component]
/// Shared tab list primitive.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tab-list"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger primitive.
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role="tab".to_string()
            selected=selected
            ui_slot="tab"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Placeholder content for empty windows and panes.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] glyph: Option<&'static str>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {glyph.map(|glyph| view! { <div data-ui-slot="glyph" aria-hidden="true">{glyph}</div> })}
            <p data-ui-slot="message">{message}</p>
        </div>
    }
}
