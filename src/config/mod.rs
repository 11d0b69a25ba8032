use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://api.open-notify.org/astros.json";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "iss-crew")]
#[command(about = "Fetches the current ISS crew and prints it")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            verbose: false,
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let config = CliConfig {
            endpoint: "not a url".to_string(),
            timeout_secs: 10,
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = CliConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 0,
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
