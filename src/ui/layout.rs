//! Layout components (header, centered form area, status bar)

use super::widgets::fade_in_color;
use crate::app::App;
use crate::platform::RESEND_SHORTCUT;
use crate::state::{FormState, Route};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest a form column gets on large terminals
const FORM_MAX_WIDTH: u16 = 64;

/// Create the main layout: header, content, and a reserved status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a column of `height` rows horizontally and vertically in `area`
pub fn centered_form(area: Rect, height: u16) -> Rect {
    let width = area.width.min(FORM_MAX_WIDTH);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(column);
    centered
}

/// Draw the screen title, fading in after navigation
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let color = fade_in_color(app.state.fade_in.as_ref(), Color::Cyan);

    let mut lines = vec![Line::from(Span::styled(
        app.state.current_view.title(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    if let Some(subtitle) = subtitle(app) {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let header = Paragraph::new(lines).centered();
    frame.render_widget(header, area.inner(ratatui::layout::Margin::new(1, 1)));
}

fn subtitle(app: &App) -> Option<String> {
    match (&app.state.current_view, &app.state.form) {
        (Route::Login, _) => Some("Sign in with your phone number".to_string()),
        (_, FormState::Otp(form)) => Some(format!(
            "Enter the 6-digit code sent to {}",
            form.target.masked()
        )),
        (Route::Aadhaar, _) => Some("Enter your 12-digit Aadhaar number".to_string()),
        (Route::Pancard, _) => Some("Enter your 10-character PAN".to_string()),
        _ => None,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &Route) -> String {
    match view {
        Route::Login => "Enter:send OTP".to_string(),
        Route::Otp | Route::AadhaarOtp | Route::PanOtp => {
            format!("←/→:cell  Enter:verify  {RESEND_SHORTCUT}:resend  Esc:back")
        }
        Route::Aadhaar | Route::Pancard => "Enter:send OTP  Esc:back".to_string(),
        Route::AllBus => "j/k:nav  a:add bus  r:refresh  Esc:back".to_string(),
        Route::AddBus => "Tab:next  Space/←/→:change  ^S:save  Esc:back".to_string(),
    }
}
