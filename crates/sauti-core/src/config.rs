//! Configuration types for the Sauti voice gateway

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upstream synthesis provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the provider API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent in the `xi-api-key` header of every outbound request
    #[serde(default)]
    pub api_key: String,

    /// Model identifier forwarded with each synthesis request
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Bound on the whole outbound exchange (connect + full body), seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            model_id: default_model_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_model_id() -> String {
    "eleven_turbo_v2_5".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret callers must present in the API key header
    #[serde(default)]
    pub api_secret: String,

    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_secret: String::new(),
            cors_enabled: default_cors_enabled(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_enabled() -> bool {
    true
}

/// Top-level gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderConfig,
}

impl GatewayConfig {
    /// Check that the secrets the gateway cannot run without are present.
    pub fn validate(&self) -> Result<()> {
        if self.server.api_secret.is_empty() {
            return Err(Error::Config("server.api_secret is not set".to_string()));
        }
        if self.provider.api_key.is_empty() {
            return Err(Error::Config("provider.api_key is not set".to_string()));
        }
        Ok(())
    }
}
