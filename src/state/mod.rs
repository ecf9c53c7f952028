//! Application state module

mod app_state;
pub mod bus;
mod forms;
mod navigation;
mod timer;
mod transition;

pub use app_state::*;
pub use bus::{Bus, CreateBusRequest};
pub use forms::*;
pub use navigation::*;
pub use timer::*;
pub use transition::*;
