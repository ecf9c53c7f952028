//! Keystroke normalization and submit-time format validation
//!
//! Every screen funnels raw keystrokes through [`normalize`] and its submit
//! action through [`validate`], so each format rule exists exactly once.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Digits in a national ID (Aadhaar)
pub const NATIONAL_ID_DIGITS: usize = 12;
/// National ID digits are displayed in runs of this size
pub const NATIONAL_ID_GROUP: usize = 4;
/// Characters in a tax ID (PAN)
pub const TAX_ID_LEN: usize = 10;
/// Digits in a phone number (without country code)
pub const PHONE_DIGITS: usize = 10;
/// Digits in a one-time code
pub const OTP_LEN: usize = 6;

static NATIONAL_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{12}$").expect("Failed to compile national ID regex"));

static TAX_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("Failed to compile tax ID regex")
});

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("Failed to compile phone regex"));

static OTP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{6}$").expect("Failed to compile OTP regex"));

/// The kinds of identifier the onboarding screens accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    NationalId,
    TaxId,
    Phone,
    /// A one-time code; normalization applies per cell, validation to the joined code
    Otp,
}

impl InputKind {
    /// Placeholder shown in an empty field
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::NationalId => "XXXX XXXX XXXX",
            Self::TaxId => "ABCDE1234F",
            Self::Phone => "Enter Phone Number",
            Self::Otp => "-",
        }
    }

    /// The error reported when a value of this kind fails validation
    pub fn error(&self) -> ValidationError {
        match self {
            Self::NationalId => ValidationError::NationalId,
            Self::TaxId => ValidationError::TaxId,
            Self::Phone => ValidationError::Phone,
            Self::Otp => ValidationError::Otp,
        }
    }
}

/// Field-specific validation failure. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid 12-digit Aadhaar number")]
    NationalId,
    #[error("Please enter a valid PAN number (e.g., ABCDE1234F)")]
    TaxId,
    #[error("Please enter a valid 10-digit phone number")]
    Phone,
    #[error("Please enter a valid 6-digit OTP")]
    Otp,
}

/// Outcome of a single validation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self { error: None }
    }

    pub fn fail(error: ValidationError) -> Self {
        Self { error: Some(error) }
    }

    fn check(kind: InputKind, valid: bool) -> Self {
        if valid {
            Self::pass()
        } else {
            Self::fail(kind.error())
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable reason, present only on failure
    pub fn reason(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Normalize raw input for display. Runs on every keystroke.
pub fn normalize(kind: InputKind, raw: &str) -> String {
    match kind {
        InputKind::NationalId => {
            let digits: String = digits_only(raw).take(NATIONAL_ID_DIGITS).collect();
            group(&digits, NATIONAL_ID_GROUP)
        }
        InputKind::TaxId => raw
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_uppercase())
            .take(TAX_ID_LEN)
            .collect(),
        InputKind::Phone => digits_only(raw).take(PHONE_DIGITS).collect(),
        // A cell holds one digit; the most recently typed one wins
        InputKind::Otp => digits_only(raw).last().map(String::from).unwrap_or_default(),
    }
}

/// Validate a value against its format rule. Runs only on submit.
pub fn validate(kind: InputKind, value: &str) -> ValidationResult {
    let valid = match kind {
        InputKind::NationalId => validate_national_id(value),
        InputKind::TaxId => validate_tax_id(value),
        InputKind::Phone => validate_phone(value),
        InputKind::Otp => validate_otp_code(value),
    };
    ValidationResult::check(kind, valid)
}

/// Exactly 12 digits once group separators are stripped
pub fn validate_national_id(value: &str) -> bool {
    let digits: String = digits_only(value).collect();
    NATIONAL_ID_REGEX.is_match(&digits)
}

pub fn validate_tax_id(value: &str) -> bool {
    TAX_ID_REGEX.is_match(value)
}

pub fn validate_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

pub fn validate_otp_code(value: &str) -> bool {
    OTP_REGEX.is_match(value)
}

/// Strip everything but ASCII digits
pub fn digits_only(raw: &str) -> impl Iterator<Item = char> + '_ {
    raw.chars().filter(char::is_ascii_digit)
}

/// Insert a space between every run of `size` characters
pub(crate) fn group(value: &str, size: usize) -> String {
    let mut grouped = String::with_capacity(value.len() + value.len() / size);
    for (i, c) in value.chars().enumerate() {
        if i > 0 && i % size == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}
