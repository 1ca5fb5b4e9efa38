use anyhow::{Context, Result};
use std::env;

#[derive(Clone, Debug)]
pub struct IdentityConfig {
    pub identity_url: String,
    pub username: String,
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub identity: IdentityConfig,
    pub region: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        // Identity Config
        let identity_url =
            env::var("STRATUS_IDENTITY_URL").context("STRATUS_IDENTITY_URL must be set")?;
        let username = env::var("STRATUS_USERNAME").context("STRATUS_USERNAME must be set")?;
        let api_key = env::var("STRATUS_API_KEY").context("STRATUS_API_KEY must be set")?;

        let identity = IdentityConfig {
            identity_url,
            username,
            api_key,
        };

        // Default region used when resolving catalog endpoints
        let region = env::var("STRATUS_REGION").context("STRATUS_REGION must be set")?;

        Ok(Self { identity, region })
    }
}
