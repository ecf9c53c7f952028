//! Form rendering module
//!
//! - `field_renderer`: field, message and hint rendering shared by all forms
//! - `login_form`: phone number entry
//! - `id_form`: Aadhaar and PAN capture
//! - `otp_form`: six-cell code entry with the resend countdown
//! - `bus_form`: bus creation

mod bus_form;
mod field_renderer;
mod id_form;
mod login_form;
mod otp_form;

pub use bus_form::draw_add_bus;
pub use id_form::draw_id_capture;
pub use login_form::draw_login;
pub use otp_form::draw_otp;
