//! OTP entry rendering

use super::field_renderer::{draw_form_message, draw_help_text};
use crate::app::App;
use crate::input::OTP_LEN;
use crate::platform::RESEND_SHORTCUT;
use crate::state::{FormState, OtpForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_form;
use crate::ui::widgets::fade_in_color;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;

/// Draw an OTP screen
pub fn draw_otp(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Otp(form) = &app.state.form else {
        return;
    };

    let area = centered_form(area, CELL_HEIGHT + 2 + 1 + 1 + BUTTON_HEIGHT + 1);
    let [cells_area, message_area, resend_area, _, button_area, help_area] = Layout::vertical([
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_cells(frame, cells_area, form);
    draw_form_message(frame, message_area, app.state.form.error(), None);
    draw_resend(frame, resend_area, form);
    render_button(
        frame,
        button_area,
        "Verify",
        true,
        form.digits.validate().is_valid(),
        app.state.form.is_pressed(),
    );
    draw_help_text(
        frame,
        help_area,
        &[("←/→", "cell"), ("Enter", "verify"), ("Esc", "back")],
    );
}

/// One bordered box per digit; the focused box is highlighted
fn draw_cells(frame: &mut Frame, area: Rect, form: &OtpForm) {
    let cells = Layout::horizontal([Constraint::Length(CELL_WIDTH); OTP_LEN])
        .flex(Flex::Center)
        .spacing(1)
        .split(area);

    for (index, (digit, cell_area)) in form.digits.cells().iter().zip(cells.iter()).enumerate() {
        let focused = index == form.digits.focus();
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else if form.error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = digit.map(String::from).unwrap_or_default();
        let cell = Paragraph::new(text)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if focused {
                        BorderType::Thick
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(border_style),
            );
        frame.render_widget(cell, *cell_area);
    }
}

/// Countdown while the cooldown runs, then the resend prompt fading in
fn draw_resend(frame: &mut Frame, area: Rect, form: &OtpForm) {
    let line = if form.timer.resend_enabled() {
        let color = fade_in_color(form.resend_fade.as_ref(), Color::Cyan);
        Line::from(vec![
            Span::styled(
                form.timer.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({RESEND_SHORTCUT})"),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::styled(form.timer.label(), Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(line).centered(), area);
}
