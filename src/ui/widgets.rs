//! Reusable UI widget helpers

use crate::state::{blend, Transition};
use ratatui::{
    layout::Rect,
    style::Color,
    widgets::{List, ListState},
    Frame,
};

/// Background the fades start from
const FADE_FROM: (u8, u8, u8) = (0, 0, 0);

/// Render a scrollable list that keeps the selected item visible
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Color of something fading in towards `target`. A finished or absent
/// transition yields `target` itself.
pub fn fade_in_color(transition: Option<&Transition>, target: Color) -> Color {
    match transition {
        Some(t) if !t.is_complete() => {
            let (r, g, b) = blend(FADE_FROM, rgb(target), t.progress());
            Color::Rgb(r, g, b)
        }
        _ => target,
    }
}

/// Approximate RGB for the named colors the screens use
fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Cyan => (0, 205, 205),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Red => (205, 0, 0),
        Color::Gray => (192, 192, 192),
        Color::DarkGray => (128, 128, 128),
        _ => (229, 229, 229),
    }
}
