use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use auth::token::Algorithm;
use auth::TokenCodec;
use auth::TokenError;
use chrono::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub auth: AuthConfig,
}

/// Authentication configuration section.
///
/// Read-only inputs to the gateway: the process secret, the signature
/// algorithm identifier, and the two token lifetimes.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub algorithm: String,
    pub access_token_ttl_minutes: i64,
    pub refresh_token_ttl_days: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SECRET, AUTH__ALGORITHM, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults below
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("auth.secret", "change-me-in-production")?
            .set_default("auth.algorithm", "HS256")?
            .set_default("auth.access_token_ttl_minutes", 30)?
            .set_default("auth.refresh_token_ttl_days", 7)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

impl AuthConfig {
    /// Build the token codec for the configured secret and algorithm.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm identifier is not recognized
    pub fn codec(&self) -> Result<TokenCodec, TokenError> {
        let algorithm = self
            .algorithm
            .parse::<Algorithm>()
            .map_err(|_| TokenError::UnsupportedAlgorithm(self.algorithm.clone()))?;

        Ok(TokenCodec::new(self.secret.as_bytes(), algorithm))
    }

    pub fn access_ttl(&self) -> Duration {
        Duration::minutes(self.access_token_ttl_minutes)
    }

    pub fn refresh_ttl(&self) -> Duration {
        Duration::days(self.refresh_token_ttl_days)
    }
}
