//! Input normalizer/validator shared by every form screen

mod mask;
mod rules;

pub use mask::mask;
pub use rules::{digits_only, normalize, validate, InputKind, ValidationResult, OTP_LEN};
