//! Static drive contents and the expansion model over them.

use std::collections::BTreeSet;

use serde_json::Value;

use FileNode::{File, Folder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileNode {
    Folder {
        name: &'static str,
        children: &'static [FileNode],
    },
    File {
        name: &'static str,
        size: &'static str,
    },
}

impl FileNode {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Folder { name, .. } | Self::File { name, .. } => *name,
        }
    }

    fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }
}

pub(crate) const DRIVE_ROOT: &[FileNode] = &[
    Folder {
        name: "System Folder",
        children: &[
            File { name: "System", size: "2.1 MB" },
            File { name: "Finder", size: "512 KB" },
            Folder { name: "Extensions", children: &[] },
        ],
    },
    Folder {
        name: "Applications",
        children: &[
            File { name: "SimpleText", size: "128 KB" },
            File { name: "Calculator", size: "64 KB" },
            File { name: "TeachText", size: "96 KB" },
        ],
    },
    Folder {
        name: "Documents",
        children: &[
            File { name: "Resume.txt", size: "4 KB" },
            File { name: "Portfolio.html", size: "12 KB" },
            Folder {
                name: "Projects",
                children: &[
                    Folder { name: "WebFramework", children: &[] },
                    Folder { name: "GameEngine", children: &[] },
                    Folder { name: "CLITool", children: &[] },
                ],
            },
        ],
    },
    Folder {
        name: "Games",
        children: &[
            Folder { name: "Marathon", children: &[] },
            Folder { name: "Escape Velocity", children: &[] },
        ],
    },
    Folder {
        name: "Utilities",
        children: &[
            File { name: "Disk First Aid", size: "256 KB" },
            File { name: "AppleCD Audio Player", size: "192 KB" },
        ],
    },
    File { name: "Read Me", size: "8 KB" },
];

pub(crate) const FREE_SPACE_LABEL: &str = "42.3 MB available";

/// One rendered row of the tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VisibleRow {
    pub(crate) path: String,
    pub(crate) name: &'static str,
    pub(crate) depth: usize,
    pub(crate) size: Option<&'static str>,
    /// `None` for files.
    pub(crate) expanded: Option<bool>,
}

/// Expanded folders keyed by full slash-joined path (`Documents/Projects`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FileBrowserState {
    expanded: BTreeSet<String>,
}

impl FileBrowserState {
    /// Reads `{"expanded": ["Documents", ...]}` launch params; anything else starts collapsed.
    pub(crate) fn from_launch_params(params: &Value) -> Self {
        let expanded = params
            .get("expanded")
            .and_then(Value::as_array)
            .map(|paths| {
                paths
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self { expanded }
    }

    pub(crate) fn toggle(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    pub(crate) fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub(crate) fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        self.collect_rows(DRIVE_ROOT, "", 0, &mut rows);
        rows
    }

    fn collect_rows(
        &self,
        nodes: &'static [FileNode],
        parent: &str,
        depth: usize,
        rows: &mut Vec<VisibleRow>,
    ) {
        for node in nodes {
            let path = if parent.is_empty() {
                node.name().to_string()
            } else {
                format!("{parent}/{}", node.name())
            };
            match node {
                FileNode::Folder { name, children } => {
                    let expanded = self.is_expanded(&path);
                    rows.push(VisibleRow {
                        path: path.clone(),
                        name: *name,
                        depth,
                        size: None,
                        expanded: Some(expanded),
                    });
                    if expanded {
                        self.collect_rows(*children, &path, depth + 1, rows);
                    }
                }
                FileNode::File { name, size } => rows.push(VisibleRow {
                    path,
                    name: *name,
                    depth,
                    size: Some(*size),
                    expanded: None,
                }),
            }
        }
    }
}

/// Top-level item and folder counts shown in the status bar.
pub(crate) fn drive_summary() -> (usize, usize) {
    let folders = DRIVE_ROOT.iter().filter(|node| node.is_folder()).count();
    (DRIVE_ROOT.len(), folders)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn row_paths(state: &FileBrowserState) -> Vec<String> {
        state
            .visible_rows()
            .into_iter()
            .map(|row| row.path)
            .collect()
    }

    #[test]
    fn collapsed_drive_shows_top_level_only() {
        let state = FileBrowserState::default();
        assert_eq!(
            row_paths(&state),
            vec![
                "System Folder",
                "Applications",
                "Documents",
                "Games",
                "Utilities",
                "Read Me",
            ]
        );
        assert_eq!(drive_summary(), (6, 5));
    }

    #[test]
    fn toggling_expands_and_collapses_by_full_path() {
        let mut state = FileBrowserState::default();
        state.toggle("Documents");
        state.toggle("Documents/Projects");

        let rows = state.visible_rows();
        let projects = rows
            .iter()
            .find(|row| row.path == "Documents/Projects")
            .expect("projects row");
        assert_eq!(projects.depth, 1);
        assert_eq!(projects.expanded, Some(true));
        assert!(rows
            .iter()
            .any(|row| row.path == "Documents/Projects/GameEngine" && row.depth == 2));

        state.toggle("Documents");
        assert_eq!(row_paths(&state).len(), 6);
        // Nested expansion is remembered while the parent is collapsed.
        assert!(state.is_expanded("Documents/Projects"));
    }

    #[test]
    fn files_carry_sizes_and_no_expansion_flag() {
        let mut state = FileBrowserState::default();
        state.toggle("Applications");
        let simple_text = state
            .visible_rows()
            .into_iter()
            .find(|row| row.name == "SimpleText")
            .expect("SimpleText row");
        assert_eq!(simple_text.size, Some("128 KB"));
        assert_eq!(simple_text.expanded, None);
    }

    #[test]
    fn launch_params_preexpand_folders() {
        let state = FileBrowserState::from_launch_params(&json!({ "expanded": ["Games", 7] }));
        assert!(state.is_expanded("Games"));
        assert_eq!(row_paths(&state).len(), 8);

        assert_eq!(
            FileBrowserState::from_launch_params(&Value::Null),
            FileBrowserState::default()
        );
    }
}
