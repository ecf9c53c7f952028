//! Add-bus form rendering

use super::field_renderer::{draw_field, draw_form_message, draw_help_text};
use crate::app::App;
use crate::state::{AddBusForm, Form, FormState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Rows of field indices; a single-entry row spans the full width
const ROWS: &[&[usize]] = &[&[0, 1], &[2], &[3, 4], &[5, 6], &[7, 8], &[9, 10], &[11]];

/// Draw the add-bus form
pub fn draw_add_bus(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::AddBus(form) = &app.state.form else {
        return;
    };

    let mut constraints: Vec<Constraint> = ROWS
        .iter()
        .map(|row| {
            let multiline = row
                .iter()
                .any(|&i| form.get_field(i).is_some_and(|f| f.is_multiline));
            Constraint::Length(if multiline { 4 } else { 3 })
        })
        .collect();
    constraints.extend([
        Constraint::Length(2),             // Error / success
        Constraint::Length(BUTTON_HEIGHT), // Submit
        Constraint::Length(1),             // Help text
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(2)
        .split(area);

    for (row, row_area) in ROWS.iter().zip(chunks.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
            .split(*row_area);
        for (&index, cell) in row.iter().zip(cells.iter()) {
            if let Some(field) = form.get_field(index) {
                draw_field(frame, *cell, field, form.active_field_index == index);
            }
        }
    }

    let rest = &chunks[ROWS.len()..];
    draw_form_message(frame, rest[0], form.error.as_deref(), form.success.as_deref());

    let [button_area] = Layout::horizontal([Constraint::Length(20)])
        .flex(ratatui::layout::Flex::Center)
        .areas(rest[1]);
    render_button(
        frame,
        button_area,
        "Add Bus",
        form.is_submit_active(),
        true,
        app.state.form.is_pressed(),
    );

    draw_help_text(frame, rest[2], &help_keys(form));
}

fn help_keys(form: &AddBusForm) -> Vec<(&'static str, &'static str)> {
    let on_choice = form
        .get_field(form.active_field_index)
        .is_some_and(|f| !f.accepts_text());
    let mut keys = vec![("Tab", "next field")];
    if on_choice {
        keys.push(("Space", "change"));
    }
    keys.push(("^S", "save"));
    keys.push(("Esc", "back"));
    keys
}
