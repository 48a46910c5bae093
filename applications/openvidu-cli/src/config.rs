/// CLI configuration
use crate::error::{CliError, Result};
use config::{Config, Environment, File};
use openvidu_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `OPENVIDU_URL`, `OPENVIDU_SECRET`.
pub const ENV_PREFIX: &str = "OPENVIDU";

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "openvidu.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub secret: String,
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub secret: Option<String>,
}

impl CliConfig {
    /// Load configuration from file, environment and command-line overrides
    pub fn load(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        Self::load_with_env(file, Environment::with_prefix(ENV_PREFIX), overrides)
    }

    /// Same as [`CliConfig::load`] with an explicit environment source.
    pub fn load_with_env(
        file: Option<&Path>,
        env: Environment,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let mut settings = Config::builder();

        match file {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(File::from(default_path));
                }
            }
        }

        settings = settings
            .add_source(env)
            .set_override_option("url", overrides.url)?
            .set_override_option("secret", overrides.secret)?;

        let config: CliConfig = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(CliError::Config(format!(
                "Server URL is required (set {}_URL or --url)",
                ENV_PREFIX
            )));
        }

        if self.secret.is_empty() {
            return Err(CliError::Config(format!(
                "Server secret is required (set {}_SECRET or --secret)",
                ENV_PREFIX
            )));
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.url.clone(), self.secret.clone())
    }
}
