//! Bus list view rendering

use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::Bus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the vendor's buses
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(format!(" Buses ({}) ", app.state.buses.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if let Some(error) = &app.state.list_error {
        let message = Paragraph::new(Line::styled(error, Style::default().fg(Color::Red)))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(message, chunks[0]);
        return;
    }

    if app.state.buses.is_empty() {
        let empty = Paragraph::new(Line::from(vec![
            Span::raw("No buses yet. Press "),
            Span::styled("a", Style::default().fg(Color::Cyan)),
            Span::raw(" to add one."),
        ]))
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(empty, chunks[0]);
        return;
    }

    let items: Vec<ListItem> = app.state.buses.iter().map(bus_item).collect();
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    render_scrollable_list(frame, chunks[0], list, app.state.selected_index);

    if let Some(bus) = app.state.buses.get(app.state.selected_index) {
        draw_detail(frame, chunks[1], bus);
    }
}

fn bus_item(bus: &Bus) -> ListItem<'_> {
    let status = if bus.is_active {
        Span::styled("● ", Style::default().fg(Color::Green))
    } else {
        Span::styled("○ ", Style::default().fg(Color::DarkGray))
    };
    ListItem::new(Line::from(vec![
        status,
        Span::styled(&bus.name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(&bus.number, Style::default().fg(Color::Yellow)),
    ]))
}

fn draw_detail(frame: &mut Frame, area: Rect, bus: &Bus) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(vec![label("Number:  "), Span::raw(&bus.number)]),
        Line::from(vec![label("Type:    "), Span::raw(bus.type_label())]),
        Line::from(vec![label("Seating: "), Span::raw(&bus.seat_type)]),
        Line::from(vec![label("Seats:   "), Span::raw(bus.seats.to_string())]),
        Line::from(vec![
            label("Status:  "),
            if bus.is_active {
                Span::styled("Active", Style::default().fg(Color::Green))
            } else {
                Span::styled("Inactive", Style::default().fg(Color::DarkGray))
            },
        ]),
    ];
    if let Some(created) = bus.created_at {
        lines.push(Line::from(vec![
            label("Added:   "),
            Span::raw(created.format("%Y-%m-%d").to_string()),
        ]));
    }
    if !bus.description.is_empty() {
        lines.push(Line::from(""));
        lines.extend(bus.description.lines().map(Line::raw));
    }

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", bus.name))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(detail, area);
}
