//! HTTP client for the bus REST API
//!
//! Thin wrapper over `reqwest`: one POST to create a bus and one GET to list
//! them, both relative to the configured base URL.

use super::ApiError;
use super::traits::BusApi;
use crate::state::{Bus, CreateBusRequest};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Request};
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Path of the bus collection resource
const BUSES_PATH: &str = "/api/buses";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the bus API
pub struct BusApiClient {
    client: Client,
    base_url: String,
}

impl BusApiClient {
    /// Create a new client for `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn buses_url(&self) -> String {
        format!("{}{}", self.base_url, BUSES_PATH)
    }

    /// Build the JSON POST for a new bus
    fn create_request(&self, request: &CreateBusRequest) -> reqwest::Result<Request> {
        self.client.post(self.buses_url()).json(request).build()
    }
}

#[async_trait]
impl BusApi for BusApiClient {
    async fn create_bus(&mut self, request: &CreateBusRequest) -> Result<()> {
        let http_request = self.create_request(request).map_err(ApiError::from)?;
        tracing::info!(
            name = %request.name,
            number = %request.number,
            "Posting bus to {}",
            http_request.url()
        );

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()).into());
        }
        Ok(())
    }

    async fn list_buses(&mut self) -> Result<Vec<Bus>> {
        let url = self.buses_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()).into());
        }

        let buses = response.json::<Vec<Bus>>().await.map_err(ApiError::from)?;
        tracing::debug!("Fetched {} buses", buses.len());
        Ok(buses)
    }
}
