//! Form domain layer
//!
//! Type-safe form handling for the onboarding screens.

mod field;
mod form_state;
mod otp;

pub use field::{ChoiceOption, FormField};
pub use form_state::{AddBusForm, Form, FormState, IdCaptureForm, LoginForm, OtpForm};
