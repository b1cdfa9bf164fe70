use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::config::Environment;

/// Documented Ocrolus webhook egress addresses. Overridable via
/// WEBHOOK_ALLOWED_IPS for self-hosted mocks and local testing.
const DEFAULT_ALLOWED_IPS: &[&str] = &["18.205.30.63", "18.208.79.114", "34.237.73.95"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set. Modify .env to contain the Ocrolus widget credentials.")]
    MissingVar(&'static str),

    #[error("Unable to initialize environment {0}. Missing issuer URLs for environment level.")]
    UnknownEnvironment(String),

    #[error("APP_PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),

    #[error("WEBHOOK_ALLOWED_IPS contains an invalid address: '{0}'")]
    InvalidAllowlistEntry(String),
}

/// Static process configuration. Loaded once at startup and read-only
/// afterwards; credentials never leave this struct.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub widget_uuid: String,
    pub port: u16,
    pub widget_url: String,
    pub auth_url: String,
    pub api_url: String,
    pub allowed_ips: Vec<IpAddr>,
    pub download_dir: PathBuf,
}

impl Config {
    /// Loads the configuration from environment variables. Missing or empty
    /// credentials are fatal so the process aborts before binding a port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id = require_var("OCROLUS_CLIENT_ID")?;
        let client_secret = require_var("OCROLUS_CLIENT_SECRET")?;
        let widget_uuid = require_var("OCROLUS_WIDGET_UUID")?;

        let environment: Environment = env::var("OCROLUS_WIDGET_ENVIRONMENT")
            .unwrap_or_else(|_| "production".to_string())
            .parse()?;

        let port_raw = env::var("APP_PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw))?;

        let widget_url = env::var("OCROLUS_WIDGET_URL")
            .unwrap_or_else(|_| environment.widget_url().to_string());
        let auth_url =
            env::var("OCROLUS_AUTH_URL").unwrap_or_else(|_| environment.auth_url().to_string());
        let api_url =
            env::var("OCROLUS_API_URL").unwrap_or_else(|_| environment.api_url().to_string());

        let allowed_ips = match env::var("WEBHOOK_ALLOWED_IPS") {
            Ok(raw) => parse_ip_list(&raw)?,
            Err(_) => DEFAULT_ALLOWED_IPS
                .iter()
                .map(|ip| ip.parse().expect("default allowlist entry is a valid IP"))
                .collect(),
        };

        let download_dir =
            PathBuf::from(env::var("DOWNLOAD_DIR").unwrap_or_else(|_| "downloads".to_string()));

        Ok(Config {
            client_id,
            client_secret,
            widget_uuid,
            port,
            widget_url,
            auth_url,
            api_url,
            allowed_ips,
            download_dir,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn parse_ip_list(raw: &str) -> Result<Vec<IpAddr>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse()
                .map_err(|_| ConfigError::InvalidAllowlistEntry(entry.to_string()))
        })
        .collect()
}
