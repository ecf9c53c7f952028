//! Masked rendering of identifiers for logs and subtitles

use super::rules::{digits_only, group, InputKind, NATIONAL_ID_GROUP};

const MASK_CHAR: char = 'X';

/// Render `value` with only its first and last few characters visible
pub fn mask(kind: InputKind, value: &str) -> String {
    match kind {
        InputKind::NationalId => {
            let digits: String = digits_only(value).collect();
            group(&mask_middle(&digits, 4, 4), NATIONAL_ID_GROUP)
        }
        InputKind::Phone => {
            let digits: String = digits_only(value).collect();
            mask_middle(&digits, 2, 2)
        }
        InputKind::TaxId => mask_middle(value, 2, 2),
        InputKind::Otp => MASK_CHAR.to_string().repeat(value.chars().count()),
    }
}

/// Replace all but `keep_start` leading and `keep_end` trailing characters.
/// Values too short to keep both ends are masked entirely.
fn mask_middle(value: &str, keep_start: usize, keep_end: usize) -> String {
    let len = value.chars().count();
    if len <= keep_start + keep_end {
        return MASK_CHAR.to_string().repeat(len);
    }
    value
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < keep_start || i >= len - keep_end {
                c
            } else {
                MASK_CHAR
            }
        })
        .collect()
}
