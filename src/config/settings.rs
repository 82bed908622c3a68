//! Application settings and configuration
//!
//! Settings are read once at startup from environment variables (and an
//! optional `.env` file) and stay immutable for the lifetime of the process.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::env;
use std::fmt;
use std::time::Duration;

/// Downstream Ollama base URL used when `OLLAMA_URL` is not set
pub const DEFAULT_OLLAMA_URL: &str = "http://ollama:11434";

/// Model injected into chat payloads when `DEFAULT_MODEL` is not set
pub const FALLBACK_MODEL: &str = "llama3";

/// Outbound request timeout used when `OLLAMA_TIMEOUT_SECONDS` is not set
pub const DEFAULT_OLLAMA_TIMEOUT_SECONDS: u64 = 60;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => anyhow::bail!("Invalid environment: {}. Expected: development, staging, or production", s),
        }
    }
}

/// Main application settings
#[derive(Debug, Clone)]
pub struct Settings {
    // App settings
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,
    pub log_level: String,

    // Server settings
    pub host: String,
    pub port: u16,

    // Downstream settings
    pub ollama_url: String,
    pub ollama_timeout_seconds: u64,

    /// Model name injected when a chat payload has no truthy `model`
    pub default_model: String,
}

impl Settings {
    /// Load settings from environment variables with defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignored in production typically)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let settings = Self {
            app_name: get("APP_NAME", "ollama-relay"),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: get("ENVIRONMENT", "development")
                .parse()
                .unwrap_or_default(),
            log_level: get("LOG_LEVEL", "info"),

            host: get("HOST", "0.0.0.0"),
            port: get("PORT", "8000")
                .parse()
                .context("Invalid PORT value")?,

            ollama_url: normalize_base_url(&get("OLLAMA_URL", DEFAULT_OLLAMA_URL)),
            ollama_timeout_seconds: get(
                "OLLAMA_TIMEOUT_SECONDS",
                &DEFAULT_OLLAMA_TIMEOUT_SECONDS.to_string(),
            )
            .parse()
            .context("Invalid OLLAMA_TIMEOUT_SECONDS value")?,

            default_model: get("DEFAULT_MODEL", FALLBACK_MODEL),
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("Port cannot be 0");
        }

        if self.ollama_timeout_seconds == 0 {
            anyhow::bail!("Ollama timeout must be > 0");
        }

        if self.default_model.trim().is_empty() {
            anyhow::bail!("DEFAULT_MODEL cannot be empty");
        }

        if !self.ollama_url.starts_with("http://") && !self.ollama_url.starts_with("https://") {
            anyhow::bail!("Invalid OLLAMA_URL: {} (expected http:// or https://)", self.ollama_url);
        }

        Ok(())
    }

    /// Get the server address string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn ollama_timeout(&self) -> Duration {
        Duration::from_secs(self.ollama_timeout_seconds)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "ollama-relay".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: Environment::Development,
            log_level: "info".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_timeout_seconds: DEFAULT_OLLAMA_TIMEOUT_SECONDS,
            default_model: FALLBACK_MODEL.to_string(),
        }
    }
}

/// Strip trailing slashes so `{base}/api/chat` never doubles them
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
