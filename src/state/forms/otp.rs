//! Six-cell one-time code entry

use crate::input::{digits_only, normalize, validate, InputKind, ValidationResult, OTP_LEN};

/// Ordered set of single-digit cells with a focused index.
///
/// Every cell is either empty or exactly one ASCII digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpDigitSet {
    cells: [Option<char>; OTP_LEN],
    focus: usize,
}

impl OtpDigitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Option<char>; OTP_LEN] {
        &self.cells
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(OTP_LEN - 1);
    }

    /// Type into the focused cell. Non-digits are dropped; on a digit the
    /// focus moves to the next empty cell. Returns true if a digit was stored.
    pub fn input(&mut self, raw: &str) -> bool {
        let Some(digit) = normalize(InputKind::Otp, raw).chars().next() else {
            return false;
        };
        self.cells[self.focus] = Some(digit);
        self.advance();
        true
    }

    /// Delete at the focused cell. A filled cell is cleared; an empty cell
    /// clears the previous one. Focus retreats in both cases.
    pub fn backspace(&mut self) {
        if self.cells[self.focus].is_some() {
            self.cells[self.focus] = None;
            self.focus = self.focus.saturating_sub(1);
        } else if self.focus > 0 {
            self.focus -= 1;
            self.cells[self.focus] = None;
        }
    }

    /// Fill cells from the focused one onward with the digits in `text`.
    /// Returns how many digits were placed.
    pub fn paste(&mut self, text: &str) -> usize {
        let mut placed = 0;
        for digit in digits_only(text) {
            let index = self.focus + placed;
            if index >= OTP_LEN {
                break;
            }
            self.cells[index] = Some(digit);
            placed += 1;
        }
        if placed > 0 {
            self.set_focus(self.focus + placed);
        }
        placed
    }

    pub fn focus_left(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_right(&mut self) {
        self.set_focus(self.focus + 1);
    }

    /// The candidate code; empty cells contribute nothing
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Every cell filled and the joined string matching the code format
    pub fn validate(&self) -> ValidationResult {
        if !self.is_complete() {
            return ValidationResult::fail(InputKind::Otp.error());
        }
        validate(InputKind::Otp, &self.code())
    }

    /// Empty every cell and focus the first one
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn advance(&mut self) {
        let next_empty = (self.focus + 1..OTP_LEN).find(|&i| self.cells[i].is_none());
        self.focus = next_empty.unwrap_or_else(|| (self.focus + 1).min(OTP_LEN - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(code: &str) -> OtpDigitSet {
        let mut set = OtpDigitSet::new();
        for c in code.chars() {
            set.input(&c.to_string());
        }
        set
    }

    #[test]
    fn test_full_code_validates() {
        let set = filled("123456");
        assert_eq!(set.code(), "123456");
        assert!(set.is_complete());
        assert!(set.validate().is_valid());
    }

    #[test]
    fn test_any_empty_cell_fails() {
        let mut set = filled("123456");
        set.set_focus(3);
        set.backspace();
        assert_eq!(set.code(), "12356");
        let result = set.validate();
        assert!(!result.is_valid());
        assert_eq!(result.reason().as_deref(), Some("Please enter a valid 6-digit OTP"));
    }

    #[test]
    fn test_non_digit_is_ignored_without_moving_focus() {
        let mut set = OtpDigitSet::new();
        assert!(!set.input("a"));
        assert_eq!(set.focus(), 0);
        assert_eq!(set.cells()[0], None);
    }

    #[test]
    fn test_digit_advances_focus() {
        let mut set = OtpDigitSet::new();
        set.input("4");
        assert_eq!(set.focus(), 1);
        assert_eq!(set.cells()[0], Some('4'));
    }

    #[test]
    fn test_advance_skips_to_next_empty_cell() {
        let mut set = filled("12");
        set.set_focus(3);
        set.input("9");
        set.set_focus(1);
        set.input("7");
        // cell 2 is the next empty one after 1
        assert_eq!(set.focus(), 2);
        set.input("5");
        // cell 3 is filled, 4 is empty
        assert_eq!(set.focus(), 4);
    }

    #[test]
    fn test_last_cell_keeps_focus() {
        let set = filled("123456");
        assert_eq!(set.focus(), 5);
    }

    #[test]
    fn test_typing_over_a_filled_cell_replaces_it() {
        let mut set = filled("123456");
        set.set_focus(0);
        set.input("9");
        assert_eq!(set.code(), "923456");
    }

    #[test]
    fn test_backspace_on_filled_cell_clears_and_retreats() {
        let mut set = filled("123");
        set.set_focus(2);
        set.backspace();
        assert_eq!(set.code(), "12");
        assert_eq!(set.focus(), 1);
    }

    #[test]
    fn test_backspace_on_empty_cell_clears_previous() {
        let mut set = filled("123");
        assert_eq!(set.focus(), 3);
        set.backspace();
        assert_eq!(set.code(), "12");
        assert_eq!(set.focus(), 2);
    }

    #[test]
    fn test_backspace_at_first_empty_cell_is_noop() {
        let mut set = OtpDigitSet::new();
        set.backspace();
        assert_eq!(set, OtpDigitSet::new());
    }

    #[test]
    fn test_paste_fills_from_focus() {
        let mut set = OtpDigitSet::new();
        assert_eq!(set.paste("12 34-56 78"), 6);
        assert_eq!(set.code(), "123456");
        assert_eq!(set.focus(), 5);
    }

    #[test]
    fn test_paste_partial() {
        let mut set = OtpDigitSet::new();
        set.set_focus(2);
        assert_eq!(set.paste("98"), 2);
        assert_eq!(set.cells()[2], Some('9'));
        assert_eq!(set.cells()[3], Some('8'));
        assert_eq!(set.focus(), 4);
        assert_eq!(set.paste("no digits"), 0);
        assert_eq!(set.focus(), 4);
    }

    #[test]
    fn test_clear_resets_focus() {
        let mut set = filled("1234");
        set.clear();
        assert_eq!(set.code(), "");
        assert_eq!(set.focus(), 0);
    }

    #[test]
    fn test_focus_moves_are_clamped() {
        let mut set = OtpDigitSet::new();
        set.focus_left();
        assert_eq!(set.focus(), 0);
        for _ in 0..10 {
            set.focus_right();
        }
        assert_eq!(set.focus(), 5);
    }
}
