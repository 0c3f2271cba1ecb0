use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};
use std::convert::TryFrom;

pub const DEFAULT_API_URL: &str = "https://mint.intuit.com/api";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    /// Overrides the default location of the saved emergency fund selection.
    pub prefs_file: Option<String>,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Start off with default values
            .set_default("api_url", DEFAULT_API_URL)?
            // Optional config file in the working directory
            .add_source(File::with_name("config").required(false))
            // Add in settings from environment variables (with a prefix of APP)
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        Self::try_from(settings)
    }

    pub fn with_prefs_file(mut self, prefs_file: Option<String>) -> Self {
        if prefs_file.is_some() {
            self.prefs_file = prefs_file;
        }
        self
    }
}

impl TryFrom<Config> for AppConfig {
    type Error = ConfigError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let prefs_file = match config.get_string("prefs_file") {
            Ok(path) => Some(path),
            Err(ConfigError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            api_url: config.get_string("api_url")?,
            prefs_file,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            prefs_file: None,
        }
    }
}
