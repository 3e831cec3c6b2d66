//! SimpleText: a single-buffer plain text editor with live document statistics.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use system_ui::prelude::*;

const WELCOME_TEXT: &str = "Welcome to SimpleText!

This is a retro text editor inspired by classic Mac OS.

You can type anything here - notes, code snippets, or just random thoughts.

Some features:
- Basic text editing
- Word count
- Character count
- Line count

Built with love for the classic computing aesthetic.

---
System 7.5.3 \u{2022} SimpleText v1.0
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DocumentStats {
    lines: usize,
    words: usize,
    chars: usize,
}

impl DocumentStats {
    /// An empty buffer still counts as one line.
    fn of(text: &str) -> Self {
        Self {
            lines: text.split('\n').count(),
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
        }
    }
}

#[component]
/// Text editor window content.
pub fn TextEditorApp() -> impl IntoView {
    let content = create_rw_signal(WELCOME_TEXT.to_string());
    let stats = create_memo(move |_| content.with(|text| DocumentStats::of(text)));

    view! {
        <div class="app-text-editor">
            <ToolBar aria_label="SimpleText commands">
                <Button on_click=Callback::new(move |_| content.set(String::new()))>"New"</Button>
                <Button on_click=Callback::new(move |_| logging::log!("SimpleText: save requested"))>
                    "Save"
                </Button>
                <Button on_click=Callback::new(move |_| logging::log!("SimpleText: open requested"))>
                    "Open"
                </Button>
            </ToolBar>
            <TextArea
                layout_class="text-editor-buffer"
                aria_label="Document"
                value=content
                on_input=Callback::new(move |ev| content.set(event_target_value(&ev)))
            />
            <StatusBar>
                <StatusBarItem>{move || format!("{} lines", stats.get().lines)}</StatusBarItem>
                <StatusBarItem>{move || format!("{} words", stats.get().words)}</StatusBarItem>
                <StatusBarItem>{move || format!("{} characters", stats.get().chars)}</StatusBarItem>
            </StatusBar>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_buffer_has_one_line_and_no_words() {
        assert_eq!(
            DocumentStats::of(""),
            DocumentStats {
                lines: 1,
                words: 0,
                chars: 0,
            }
        );
    }

    #[test]
    fn words_ignore_runs_of_whitespace() {
        let stats = DocumentStats::of("  hello \t world\n\nagain  ");
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.chars, 24);
    }

    #[test]
    fn welcome_text_statistics() {
        let stats = DocumentStats::of(WELCOME_TEXT);
        assert_eq!(stats.lines, 17);
        assert_eq!(stats.words, 56);
        assert_eq!(stats.chars, WELCOME_TEXT.chars().count());
    }

    #[test]
    fn characters_count_scalar_values_not_bytes() {
        assert_eq!(DocumentStats::of("\u{2022}\u{2022}").chars, 2);
    }
}
