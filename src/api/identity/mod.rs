pub mod types;

use crate::config::IdentityConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use types::{Access, ApiKeyCredentials, AuthPayload, AuthRequest, AuthResponse};

#[derive(Clone, Debug)]
pub struct IdentityClient {
    client: Client,
    config: IdentityConfig,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    /// Exchanges API-key credentials for a token and the service catalog.
    /// The catalog is what a region client resolves endpoints from.
    pub async fn authenticate(&self) -> Result<Access> {
        let url = format!("{}/tokens", self.config.identity_url);

        let body = AuthRequest {
            auth: AuthPayload {
                api_key_credentials: ApiKeyCredentials {
                    username: self.config.username.clone(),
                    api_key: self.config.api_key.clone(),
                },
            },
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to send auth request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Authentication failed: {} - {}", status, text);
        }

        let auth_response = response
            .json::<AuthResponse>()
            .await
            .context("Failed to parse auth response")?;

        Ok(auth_response.access)
    }
}
