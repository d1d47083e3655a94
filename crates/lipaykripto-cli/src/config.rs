/*
[INPUT]:  YAML configuration file and LIPAYKRIPTO_* environment variables
[OUTPUT]: Parsed client configuration
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use lipaykripto_sdk::{ClientConfig, DEFAULT_BASE_URL};

/// Prefix of environment variables overriding file values
pub const ENV_PREFIX: &str = "LIPAYKRIPTO";

/// Top-level configuration for the CLI
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Client identifier issued by the provider
    pub client_id: String,
    /// Client secret; also keys withdrawal signatures. May be left out of
    /// the file and supplied through `LIPAYKRIPTO_CLIENT_SECRET`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_secret: String,
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration from a YAML file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = settings
            .try_deserialize()
            .context("deserialize config")?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML text without environment overrides
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.client_id.is_empty(), "client_id must not be empty");
        anyhow::ensure!(
            !self.client_secret.is_empty(),
            "client_secret must not be empty (set it in the file or via {ENV_PREFIX}_CLIENT_SECRET)"
        );
        Ok(())
    }

    /// SDK client configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.client_id, &self.client_secret)
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}
