pub mod entities;
pub mod host_info;
pub mod types;

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Client for the monitoring service of one account. `endpoint` is the
/// account-scoped base URL resolved from the service catalog, e.g.
/// `https://monitoring.example.com/v1.0/12345`.
#[derive(Clone, Debug)]
pub struct MonitoringClient {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) token: String,
}

impl MonitoringClient {
    pub fn new(endpoint: String, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }
}
