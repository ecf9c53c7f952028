//! Per-screen form state
//!
//! Each screen owns exactly one of these; it is dropped together with its
//! resend timer when the screen is left.

use super::field::FormField;
use super::otp::OtpDigitSet;
use crate::input::{validate, InputKind, ValidationResult};
use crate::state::bus::{
    coerce_count, coerce_optional_count, CreateBusRequest, BUS_TYPE_OPTIONS, DECK_TYPE_OPTIONS,
    SEAT_LAYOUT_OPTIONS, SEAT_TYPE_OPTIONS,
};
use crate::state::{ResendTimer, Transition, VerificationTarget};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Login(LoginForm),
    IdCapture(IdCaptureForm),
    Otp(OtpForm),
    AddBus(AddBusForm),
}

impl FormState {
    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self {
            FormState::None | FormState::Otp(_) => None,
            FormState::Login(f) => f.get_active_field_mut(),
            FormState::IdCapture(f) => f.get_active_field_mut(),
            FormState::AddBus(f) => f.get_active_field_mut(),
        }
    }

    /// Inline error line of the current screen
    pub fn error(&self) -> Option<&str> {
        match self {
            FormState::None => None,
            FormState::Login(f) => f.error.as_deref(),
            FormState::IdCapture(f) => f.error.as_deref(),
            FormState::Otp(f) => f.error.as_deref(),
            FormState::AddBus(f) => f.error.as_deref(),
        }
    }

    /// Drop the inline error (any edit clears it)
    pub fn clear_error(&mut self) {
        match self {
            FormState::None => {}
            FormState::Login(f) => f.error = None,
            FormState::IdCapture(f) => f.error = None,
            FormState::Otp(f) => f.error = None,
            FormState::AddBus(f) => f.error = None,
        }
    }

    /// Start the submit-button pulse
    pub fn press(&mut self) {
        let pulse = Some(Transition::new(Transition::PULSE));
        match self {
            FormState::None => {}
            FormState::Login(f) => f.pressed = pulse,
            FormState::IdCapture(f) => f.pressed = pulse,
            FormState::Otp(f) => f.pressed = pulse,
            FormState::AddBus(f) => f.pressed = pulse,
        }
    }

    /// Whether the submit-button pulse is still running
    pub fn is_pressed(&self) -> bool {
        let pressed = match self {
            FormState::None => None,
            FormState::Login(f) => f.pressed,
            FormState::IdCapture(f) => f.pressed,
            FormState::Otp(f) => f.pressed,
            FormState::AddBus(f) => f.pressed,
        };
        pressed.is_some_and(|p| !p.is_complete())
    }
}

/// Phone login form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub phone: FormField,
    pub error: Option<String>,
    pub pressed: Option<Transition>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            phone: FormField::formatted("Phone Number", InputKind::Phone),
            error: None,
            pressed: None,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate(InputKind::Phone, self.phone.as_text())
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        1
    }
    fn active_field(&self) -> usize {
        0
    }
    fn set_active_field(&mut self, _index: usize) {}
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        Some(&mut self.phone)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        (index == 0).then_some(&self.phone)
    }
}

/// Aadhaar or PAN capture form
#[derive(Debug, Clone)]
pub struct IdCaptureForm {
    pub kind: InputKind,
    pub field: FormField,
    pub error: Option<String>,
    pub pressed: Option<Transition>,
}

impl IdCaptureForm {
    pub fn national_id() -> Self {
        Self::with_field(FormField::formatted("Aadhaar Number",
            InputKind::NationalId,
        ))
    }

    pub fn tax_id() -> Self {
        Self::with_field(FormField::formatted("PAN Number", InputKind::TaxId))
    }

    fn with_field(field: FormField) -> Self {
        Self {
            kind: field.kind.unwrap_or(InputKind::NationalId),
            field,
            error: None,
            pressed: None,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate(self.kind, self.field.as_text())
    }
}

impl Form for IdCaptureForm {
    fn field_count(&self) -> usize {
        1
    }
    fn active_field(&self) -> usize {
        0
    }
    fn set_active_field(&mut self, _index: usize) {}
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        Some(&mut self.field)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        (index == 0).then_some(&self.field)
    }
}

/// OTP entry with resend cooldown
#[derive(Debug, Clone)]
pub struct OtpForm {
    pub target: VerificationTarget,
    pub digits: OtpDigitSet,
    pub timer: ResendTimer,
    pub error: Option<String>,
    pub pressed: Option<Transition>,
    /// Fade of the resend prompt, started when the cooldown expires
    pub resend_fade: Option<Transition>,
}

impl OtpForm {
    pub fn new(target: VerificationTarget) -> Self {
        Self {
            target,
            digits: OtpDigitSet::new(),
            timer: ResendTimer::new(),
            error: None,
            pressed: None,
            resend_fade: None,
        }
    }

    /// Restart the cooldown and clear the cells if resend is allowed.
    /// Returns false while the cooldown is running.
    pub fn begin_resend(&mut self) -> bool {
        if !self.timer.try_resend() {
            return false;
        }
        self.digits.clear();
        self.error = None;
        self.resend_fade = None;
        true
    }
}

/// Bus creation form
#[derive(Debug, Clone)]
pub struct AddBusForm {
    pub name: FormField,
    pub number: FormField,
    pub description: FormField,
    pub bus_type: FormField,
    pub seat_type: FormField,
    pub deck_type: FormField,
    pub seat_layout: FormField,
    pub seats: FormField,
    pub total_seaters: FormField,
    pub total_sleeper: FormField,
    pub is_active: FormField,
    pub image: FormField,
    pub active_field_index: usize,
    pub error: Option<String>,
    pub success: Option<String>,
    pub pressed: Option<Transition>,
}

impl AddBusForm {
    /// Number of editable fields; the submit button follows them
    pub const FIELD_COUNT: usize = 12;

    pub fn new() -> Self {
        Self {
            name: FormField::text("Bus Name", false),
            number: FormField::text("Bus Number", false),
            description: FormField::text("Description", true),
            bus_type: FormField::choice("Bus Type", BUS_TYPE_OPTIONS),
            seat_type: FormField::choice("Seat Type", SEAT_TYPE_OPTIONS),
            deck_type: FormField::choice("Deck Type", DECK_TYPE_OPTIONS),
            seat_layout: FormField::choice("Seat Layout", SEAT_LAYOUT_OPTIONS),
            seats: FormField::text_with_value("Total Seats", "0"),
            total_seaters: FormField::text_with_value("Total Seaters", "0"),
            total_sleeper: FormField::text_with_value("Total Sleepers", "0"),
            is_active: FormField::toggle("Active", true),
            image: FormField::text("Image URL", false),
            active_field_index: 0,
            error: None,
            success: None,
            pressed: None,
        }
    }

    /// Returns true if the submit button is currently active
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::FIELD_COUNT
    }

    /// Reset every field to its default, keeping the success message
    pub fn reset(&mut self) {
        let success = self.success.take();
        *self = Self::new();
        self.success = success;
    }

    /// Build the request body, coercing the numeric fields
    pub fn to_request(&self, vendor_id: Option<String>) -> CreateBusRequest {
        let choice = |f: &FormField| f.choice_value().unwrap_or_default().to_string();
        CreateBusRequest {
            name: self.name.as_text().to_string(),
            number: self.number.as_text().to_string(),
            description: self.description.as_text().to_string(),
            bus_type: choice(&self.bus_type),
            seat_type: choice(&self.seat_type),
            deck_type: choice(&self.deck_type),
            seat_layout: choice(&self.seat_layout),
            seats: coerce_count(self.seats.as_text()),
            total_seaters: coerce_optional_count(self.total_seaters.as_text()),
            total_sleeper: coerce_optional_count(self.total_sleeper.as_text()),
            is_active: self.is_active.as_toggle(),
            image: self.image.as_text().to_string(),
            vendor_id,
        }
    }
}

impl Default for AddBusForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AddBusForm {
    fn field_count(&self) -> usize {
        Self::FIELD_COUNT + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::FIELD_COUNT);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.number),
            2 => Some(&mut self.description),
            3 => Some(&mut self.bus_type),
            4 => Some(&mut self.seat_type),
            5 => Some(&mut self.deck_type),
            6 => Some(&mut self.seat_layout),
            7 => Some(&mut self.seats),
            8 => Some(&mut self.total_seaters),
            9 => Some(&mut self.total_sleeper),
            10 => Some(&mut self.is_active),
            11 => Some(&mut self.image),
            // Submit button row
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.number),
            2 => Some(&self.description),
            3 => Some(&self.bus_type),
            4 => Some(&self.seat_type),
            5 => Some(&self.deck_type),
            6 => Some(&self.seat_layout),
            7 => Some(&self.seats),
            8 => Some(&self.total_seaters),
            9 => Some(&self.total_sleeper),
            10 => Some(&self.is_active),
            11 => Some(&self.image),
            _ => None,
        }
    }
}
