//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field. Empty formatted fields show their placeholder.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    draw_field_with_prefix(frame, area, field, is_active, None);
}

/// Draw a form field with a fixed, non-editable prefix (e.g. a dialing code)
pub fn draw_field_with_prefix(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    prefix: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let cursor = if is_active && field.accepts_text() {
        "▌"
    } else {
        ""
    };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::styled(l.to_string(), style))
            .collect();
        if display_value.ends_with('\n') || lines.is_empty() {
            lines.push(Line::default());
        }
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        let mut spans = Vec::new();
        if let Some(prefix) = prefix {
            spans.push(Span::styled(
                format!("{prefix} "),
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ));
        }
        match field.placeholder() {
            Some(placeholder) if display_value.is_empty() => {
                spans.push(cursor_span);
                spans.push(Span::styled(
                    placeholder,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            _ => {
                spans.push(Span::styled(display_value, style));
                spans.push(cursor_span);
            }
        }
        Paragraph::new(Line::from(spans))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline error or success line under a form
pub fn draw_form_message(
    frame: &mut Frame,
    area: Rect,
    error: Option<&str>,
    success: Option<&str>,
) {
    let line = match (error, success) {
        (Some(error), _) => Line::styled(error, Style::default().fg(Color::Red)),
        (None, Some(success)) => Line::styled(success, Style::default().fg(Color::Green)),
        (None, None) => return,
    };
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

/// Draw a line of key hints
pub fn draw_help_text(frame: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in keys {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
