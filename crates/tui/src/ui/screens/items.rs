use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, Focus},
    controller::{Field, Mode},
    ui::theme::Theme,
};

pub fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (title, border) = if state.editing() {
        (" Update Item ", theme.editing)
    } else {
        (" Add Item ", theme.border)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit
        ])
        .split(inner);

    for (row, field) in [(rows[0], Field::Name), (rows[1], Field::Description)] {
        let focused = state.focus == Focus::Form(field);
        render_input(frame, row, field, state.view.field(field), focused, theme);
    }

    let button = format!("[ {}]", title.trim_start());
    frame.render_widget(
        Paragraph::new(Span::styled(
            button,
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        )),
        rows[3],
    );
}

/// Label, value and a cursor when focused
fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    field: Field,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{:<13}", field.label()),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(format!("{value}{cursor}"), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let editing_id = match &state.view.mode {
        Mode::Update(id) => Some(id),
        Mode::Create => None,
    };

    let items = state
        .view
        .items
        .iter()
        .map(|item| {
            let marker = if editing_id == Some(&item.id) {
                Span::styled("✎ ", Style::default().fg(theme.editing))
            } else {
                Span::raw("  ")
            };
            ListItem::new(vec![
                Line::from(vec![
                    marker,
                    Span::styled(
                        item.name.clone(),
                        Style::default()
                            .fg(theme.text)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        item.description.clone(),
                        Style::default().fg(theme.text_muted),
                    ),
                ]),
            ])
        })
        .collect::<Vec<_>>();

    let list_focused = state.focus == Focus::List;
    let mut list_state = ListState::default();
    if list_focused && !items.is_empty() {
        list_state.select(Some(state.selected));
    }

    let border = if list_focused {
        theme.accent
    } else {
        theme.border
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Items ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().fg(theme.accent))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}
