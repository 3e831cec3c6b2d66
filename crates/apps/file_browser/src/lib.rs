//! OS Drive: a read-only folder tree browser over a fixed set of files.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod tree;

use leptos::*;
use serde_json::Value;
use system_ui::prelude::*;

use crate::tree::{drive_summary, FileBrowserState, FREE_SPACE_LABEL};

#[component]
/// File browser window content.
pub fn FileBrowserApp(
    /// Launch params; `expanded` lists folder paths to open initially.
    #[prop(optional)]
    launch_params: Value,
) -> impl IntoView {
    let browser = create_rw_signal(FileBrowserState::from_launch_params(&launch_params));
    let (item_count, folder_count) = drive_summary();

    view! {
        <div class="app-file-browser">
            <h3 class="file-browser-heading">"OS Drive"</h3>
            <Tree layout_class="file-browser-tree" aria_label="OS Drive contents">
                <For
                    each=move || browser.with(|state| state.visible_rows())
                    key=|row| (row.path.clone(), row.expanded)
                    let:row
                >
                    {match row.expanded {
                        Some(expanded) => {
                            let path = row.path.clone();
                            view! {
                                <TreeItem
                                    depth=row.depth
                                    expanded=expanded
                                    on_click=Callback::new(move |_| browser.update(|state| state.toggle(&path)))
                                >
                                    <span aria-hidden="true">{if expanded { "\u{25BC} " } else { "\u{25B6} " }}</span>
                                    {format!("\u{1F4C1} {}", row.name)}
                                </TreeItem>
                            }
                            .into_view()
                        }
                        None => view! {
                            <TreeItem depth=row.depth>
                                <span class="file-browser-file">
                                    {format!("\u{1F4C4} {}", row.name)}
                                    {row.size.map(|size| format!(" ({size})"))}
                                </span>
                            </TreeItem>
                        }
                        .into_view(),
                    }}
                </For>
            </Tree>
            <StatusBar>
                <StatusBarItem>{format!("{item_count} items")}</StatusBarItem>
                <StatusBarItem>{format!("{folder_count} folders")}</StatusBarItem>
                <StatusBarItem>{FREE_SPACE_LABEL}</StatusBarItem>
            </StatusBar>
        </div>
    }
}
