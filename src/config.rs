use std::{fs, path::Path};

use anyhow::Context;
use dotenv::dotenv;
use envsubst::substitute;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub trade: TradeConfig,
    #[serde(default)]
    pub deployments: Vec<DeploymentConfig>,
}

impl Config {
    pub fn from_yaml(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        dotenv().ok();

        let path = path.as_ref();
        let file_content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file from path: {}", path.display()))?;

        let env_vars: std::collections::HashMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("SERVER_") || key.starts_with("ROUTER_"))
            .collect();

        let interpolated = substitute(&file_content, &env_vars)
            .context("failed to substitute environment variables in YAML")?;

        let config: Config =
            serde_yaml::from_str(&interpolated).context("failed to parse YAML configuration")?;

        Ok(config)
    }

    pub fn server_uri(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Router and factory deployment for a chain, if one is configured.
    pub fn deployment(&self, chain_id: u64) -> Option<&DeploymentConfig> {
        self.deployments.iter().find(|d| d.chain_id == chain_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Defaults applied when a request leaves them out.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeConfig {
    /// Slippage tolerance in percent, e.g. "0.5"
    pub slippage_tolerance: String,
    /// Seconds until the swap expires
    pub ttl: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    pub chain_id: u64,
    pub factory: String,
    pub init_code_hash: String,
    pub router: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_yaml() {
        let config = Config::from_yaml("config/test.yaml").unwrap();

        // Verify server config
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);

        // Verify trade defaults
        assert_eq!(config.trade.slippage_tolerance, "0.5");
        assert_eq!(config.trade.ttl, 1200);

        assert_eq!(config.deployments.len(), 2);
    }

    #[test]
    fn test_deployment_lookup() {
        let config = Config::from_yaml("config/test.yaml").unwrap();

        let mainnet = config.deployment(1).unwrap();
        assert_eq!(mainnet.factory, "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
        assert_eq!(mainnet.router, "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D");

        assert!(config.deployment(250).is_some());
        assert!(config.deployment(56).is_none());
    }

    #[test]
    #[serial_test::serial]
    fn test_config_with_env_vars() {
        unsafe {
            std::env::set_var("SERVER_HOST", "127.0.0.1");
            std::env::set_var("SERVER_PORT", "9000");
        }

        let config = Config::from_yaml("config/test-env.yaml").unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server_uri(), "127.0.0.1:9000");

        unsafe {
            std::env::remove_var("SERVER_HOST");
            std::env::remove_var("SERVER_PORT");
        }
    }

    #[test]
    fn test_default_config_loads_with_valid_deployments() {
        let config = Config::from_yaml("config/default.yaml").unwrap();

        assert_eq!(config.trade.ttl, 1200);
        assert!(config.deployment(1).is_some());
        assert!(config.deployment(250).is_none());
        for deployment in &config.deployments {
            assert!(crate::router::validate_and_parse_address(&deployment.router).is_ok());
            assert!(crate::router::validate_and_parse_address(&deployment.factory).is_ok());
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::from_yaml("config/does-not-exist.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_debug_format() {
        let config = Config::from_yaml("config/test.yaml").unwrap();

        let debug_output = format!("{:?}", config);
        assert!(debug_output.contains("Config"));
        assert!(debug_output.contains("server"));
        assert!(debug_output.contains("trade"));
        assert!(debug_output.contains("deployments"));
    }
}
