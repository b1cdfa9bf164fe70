use std::str::FromStr;

use crate::domain::config::ConfigError;

/// Ocrolus environment tier. Each tier has its own widget token issuer,
/// OAuth issuer and API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn widget_url(&self) -> &'static str {
        match self {
            Environment::Development => "https://widget-demo.ocrolus.com",
            Environment::Production => "https://widget.ocrolus.com",
        }
    }

    pub fn auth_url(&self) -> &'static str {
        match self {
            Environment::Development => "https://auth.demo.ocrolus.com",
            Environment::Production => "https://auth.ocrolus.com",
        }
    }

    pub fn api_url(&self) -> &'static str {
        match self {
            Environment::Development => "https://api.demo.ocrolus.com",
            Environment::Production => "https://api.ocrolus.com",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}
