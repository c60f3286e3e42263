//! App config: HTTP bind address, chat client target, log file. Loaded from env.

use anyhow::Result;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/ask";
pub const DEFAULT_LOG_FILE: &str = "logs/calc-agent.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// CALC_BIND_ADDR
    pub bind_addr: String,
    /// CALC_API_URL; `/ask` endpoint used by the chat front end
    pub api_url: String,
    /// LOG_FILE
    pub log_file: String,
}

impl AppConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let bind_addr =
            env::var("CALC_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let api_url = env::var("CALC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bind_addr,
            api_url,
            log_file,
        })
    }

    /// Applies CLI overrides on top of the env values.
    pub fn with_overrides(mut self, bind_addr: Option<String>, api_url: Option<String>) -> Self {
        if let Some(bind_addr) = bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        self
    }

    /// bind_addr must be a socket address; api_url must be a valid URL.
    pub fn validate(&self) -> Result<()> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "CALC_BIND_ADDR is not a valid socket address: {}",
                self.bind_addr
            );
        }
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("CALC_API_URL is not a valid URL: {}", self.api_url);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("CALC_BIND_ADDR");
        env::remove_var("CALC_API_URL");
        env::remove_var("LOG_FILE");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8000");
        assert_eq!(config.api_url, "http://127.0.0.1:8000/ask");
        assert_eq!(config.log_file, "logs/calc-agent.log");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("CALC_BIND_ADDR", "0.0.0.0:9000");
        env::set_var("CALC_API_URL", "http://calc.internal:9000/ask");
        env::set_var("LOG_FILE", "/tmp/calc.log");

        let config = AppConfig::load().unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.api_url, "http://calc.internal:9000/ask");
        assert_eq!(config.log_file, "/tmp/calc.log");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides_take_precedence() {
        clear_env();
        env::set_var("CALC_BIND_ADDR", "0.0.0.0:9000");

        let config = AppConfig::load()
            .unwrap()
            .with_overrides(Some("127.0.0.1:7000".to_string()), None);

        assert_eq!(config.bind_addr, "127.0.0.1:7000");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_values() {
        clear_env();
        let config = AppConfig::load().unwrap();

        let bad_bind = config.clone().with_overrides(Some("localhost".to_string()), None);
        assert!(bad_bind.validate().is_err());

        let bad_url = config.with_overrides(None, Some("not a url".to_string()));
        assert!(bad_url.validate().is_err());
    }
}
