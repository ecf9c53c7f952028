//! UI module for rendering the TUI

mod buses;
mod components;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::{FormState, Route};
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, main_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current route
    match app.state.current_view {
        Route::Login => forms::draw_login(frame, main_area, app),
        Route::Aadhaar | Route::Pancard => forms::draw_id_capture(frame, main_area, app),
        Route::Otp | Route::AadhaarOtp | Route::PanOtp => forms::draw_otp(frame, main_area, app),
        Route::AllBus => buses::draw_list(frame, main_area, app),
        Route::AddBus => forms::draw_add_bus(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}

/// Whether any transition is still running, so the loop should redraw quickly
pub fn is_animating(app: &App) -> bool {
    let running = |t: &Option<crate::state::Transition>| t.is_some_and(|t| !t.is_complete());

    running(&app.state.fade_in)
        || app.state.form.is_pressed()
        || matches!(&app.state.form, FormState::Otp(f) if running(&f.resend_fade))
}
