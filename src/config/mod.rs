use crate::core::{AppError, Result};
use crate::modules::auth::Credentials;
use std::env;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ENSEK deployment under verification
    pub base_url: String,
    /// Login credentials, present only when both variables are set
    pub credentials: Option<Credentials>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let base_url = env::var("ENSEK_BASE_URL")
            .map_err(|_| AppError::Configuration("ENSEK_BASE_URL not set".to_string()))?;

        let credentials = match (env::var("ENSEK_USERNAME"), env::var("ENSEK_PASSWORD")) {
            (Ok(username), Ok(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        Ok(Config {
            base_url,
            credentials,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "ENSEK_BASE_URL must not be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::Configuration(format!(
                "ENSEK_BASE_URL must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }

        if let Some(credentials) = &self.credentials {
            if credentials.username.is_empty() || credentials.password.is_empty() {
                return Err(AppError::Configuration(
                    "ENSEK_USERNAME and ENSEK_PASSWORD must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
