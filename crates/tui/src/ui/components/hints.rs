use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Creates a separator span for dividing hint groups.
pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

pub mod common {
    use super::KeyHint;

    /// Hints while typing into the form.
    pub fn form_editing(editing: bool) -> Vec<KeyHint> {
        let mut hints = vec![
            KeyHint::new("Tab", "next"),
            KeyHint::new("Enter", if editing { "update" } else { "add" }),
        ];
        if editing {
            hints.push(KeyHint::new("Esc", "cancel edit"));
        }
        hints
    }

    /// Hints while the item list has focus.
    pub fn list_actions(editing: bool) -> Vec<KeyHint> {
        let mut hints = vec![
            KeyHint::new("↑↓", "select"),
            KeyHint::new("e", "edit"),
            KeyHint::new("d", "delete"),
            KeyHint::new("a", "add"),
        ];
        if editing {
            hints.push(KeyHint::new("Esc", "cancel edit"));
        }
        hints
    }

    pub fn global_shortcuts(list_focused: bool) -> Vec<KeyHint> {
        if list_focused {
            vec![KeyHint::new("q", "quit")]
        } else {
            vec![KeyHint::new("Ctrl+C", "quit")]
        }
    }
}
