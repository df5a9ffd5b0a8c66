//! Storefront CLI configuration.

use std::time::Duration;

use clap::{Args, Parser};
use zeroize::Zeroizing;

use shopfront_app::backend::BackendConfig;

use crate::commands::Command;

/// Storefront terminal client configuration
#[derive(Debug, Parser)]
#[command(name = "shopfront", about = "Terminal storefront client", long_about = None)]
pub struct CliConfig {
    /// Backend connection settings.
    #[command(flatten)]
    pub backend: BackendArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Account credentials for commands that need a session.
    #[command(flatten)]
    pub account: AccountArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Backend connection settings.
#[derive(Debug, Args)]
pub struct BackendArgs {
    /// Backend base URL
    #[arg(long, env = "SHOPFRONT_BACKEND_URL")]
    pub backend_url: String,

    /// Publishable API key
    #[arg(long, env = "SHOPFRONT_API_KEY")]
    pub api_key: String,

    /// Access token from a previous session, if any
    #[arg(long, env = "SHOPFRONT_ACCESS_TOKEN")]
    pub access_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "SHOPFRONT_REQUEST_TIMEOUT_SECONDS",
        default_value_t = BackendConfig::DEFAULT_TIMEOUT.as_secs()
    )]
    pub request_timeout_seconds: u64,
}

impl BackendArgs {
    /// Backend configuration for the shared client.
    #[must_use]
    pub fn to_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.backend_url.clone(),
            api_key: self.api_key.clone(),
            access_token: self.access_token.clone(),
            timeout: Duration::from_secs(self.request_timeout_seconds),
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Account credentials, usually supplied via the environment.
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Account email
    #[arg(long, env = "SHOPFRONT_EMAIL")]
    pub email: Option<String>,

    /// Account password
    #[arg(long, env = "SHOPFRONT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl AccountArgs {
    /// Both credentials, when configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, Zeroizing<String>)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => {
                Some((email.as_str(), Zeroizing::new(password.clone())))
            }
            _ => None,
        }
    }
}
