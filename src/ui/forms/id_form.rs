//! Aadhaar and PAN capture form rendering

use super::field_renderer::{draw_field, draw_form_message, draw_help_text};
use crate::app::App;
use crate::state::FormState;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_form;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Draw the identity capture screen for whichever document the route asks for
pub fn draw_id_capture(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::IdCapture(form) = &app.state.form else {
        return;
    };

    let area = centered_form(area, 3 + 2 + BUTTON_HEIGHT + 1);
    let [field_area, message_area, button_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_field(frame, field_area, &form.field, true);
    draw_form_message(frame, message_area, app.state.form.error(), None);
    render_button(
        frame,
        button_area,
        "Send OTP",
        true,
        form.validate().is_valid(),
        app.state.form.is_pressed(),
    );
    draw_help_text(frame, help_area, &[("Enter", "send OTP"), ("Esc", "back")]);
}
