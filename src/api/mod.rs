//! External collaborators: the bus REST API and the verification gateway

mod client;
mod error;
mod gateway;
mod traits;

pub use client::{BusApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use gateway::{CodeNotice, LocalGateway};
pub use traits::{BusApi, VerificationGateway};

#[cfg(test)]
pub use traits::{MockBusApi, MockVerificationGateway};
