//! Trait abstractions for the external collaborators, enabling mocking in tests

use crate::state::{Bus, CreateBusRequest, VerificationTarget};
use anyhow::Result;
use async_trait::async_trait;

/// Sends and checks one-time codes for an identifier
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationGateway: Send + Sync {
    /// Issue a fresh code to the target, replacing any earlier one
    async fn send_code(&mut self, target: &VerificationTarget) -> Result<()>;

    /// Check a code previously sent to the target
    async fn verify_code(&mut self, target: &VerificationTarget, code: &str) -> Result<bool>;
}

/// Bus REST API operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusApi: Send + Sync {
    /// Create a bus
    async fn create_bus(&mut self, request: &CreateBusRequest) -> Result<()>;

    /// List the vendor's buses
    async fn list_buses(&mut self) -> Result<Vec<Bus>>;
}
