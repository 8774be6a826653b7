pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Focus};

use components::hints::{self, common};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();

    // Info bar, form, list, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_info_bar(frame, layout[0], state, &theme);
    screens::items::render_form(frame, layout[1], state, &theme);
    screens::items::render_list(frame, layout[2], state, &theme);
    render_bottom_bar(frame, layout[3], state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let loaded = state
        .last_load
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut line = vec![
        Span::styled("Endpoint", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.endpoint)),
        Span::styled("Items", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.view.items.len())),
        Span::styled("Loaded", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {loaded}")),
    ];
    if state.in_flight > 0 {
        line.push(Span::styled(
            format!("  pending {}", state.in_flight),
            Style::default().fg(theme.accent),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let editing = state.editing();
    let list_focused = state.focus == Focus::List;

    let context = if list_focused {
        common::list_actions(editing)
    } else {
        common::form_editing(editing)
    };

    let mut parts = hints::hints_to_spans(&context, theme);
    parts.push(hints::hint_separator(theme));
    parts.extend(hints::hints_to_spans(
        &common::global_shortcuts(list_focused),
        theme,
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
