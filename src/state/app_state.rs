//! Application state definitions

use super::bus::Bus;
use super::forms::FormState;
use super::navigation::{Route, RouteParams};
use super::transition::Transition;
use crate::input::{mask, InputKind};
use std::collections::VecDeque;
use std::fmt;

/// What an identifier is being verified through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationChannel {
    Phone,
    NationalId,
    TaxId,
}

impl VerificationChannel {
    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::Phone => InputKind::Phone,
            Self::NationalId => InputKind::NationalId,
            Self::TaxId => InputKind::TaxId,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::NationalId => "Aadhaar",
            Self::TaxId => "PAN",
        }
    }
}

/// The identifier a one-time code is sent to and checked against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerificationTarget {
    pub channel: VerificationChannel,
    /// Normalized identifier value
    pub value: String,
}

impl VerificationTarget {
    pub fn new(channel: VerificationChannel, value: impl Into<String>) -> Self {
        Self {
            channel,
            value: value.into(),
        }
    }

    /// Identifier with only its ends visible
    pub fn masked(&self) -> String {
        mask(self.channel.input_kind(), &self.value)
    }
}

impl fmt::Display for VerificationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.channel.label(), self.masked())
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: Route,
    pub view_params: RouteParams,
    pub view_history: Vec<(Route, RouteParams)>,

    // Screen-local form state
    pub form: FormState,
    /// Title fade-in of the current screen
    pub fade_in: Option<Transition>,

    // Bus list
    pub buses: Vec<Bus>,
    pub selected_index: usize,
    pub list_error: Option<String>,

    // Status
    pub status_message: Option<String>,
    pub errors: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_view, Route::Login);
        assert!(state.view_history.is_empty());
        assert!(matches!(state.form, FormState::None));
        assert!(!state.has_errors());
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = AppState::default();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down(2);
        state.move_selection_down(2);
        assert_eq!(state.selected_index, 1);
        state.move_selection_down(0);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_target_display_is_masked() {
        let target = VerificationTarget::new(VerificationChannel::NationalId, "123456789012");
        assert_eq!(target.to_string(), "Aadhaar 1234 XXXX 9012");
        let phone = VerificationTarget::new(VerificationChannel::Phone, "9876543210");
        assert_eq!(phone.masked(), "98XXXXXX10");
    }
}
