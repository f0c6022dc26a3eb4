use crate::Result;
use crate::metrics::EmptyCollectionPolicy;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the base directory when no explicit configuration is given
pub const CONFIG_FILE_NAME: &str = "lloc-report.toml";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Item attribute holding the metric to aggregate
    #[serde(default = "default_metric_attribute")]
    pub metric_attribute: String,

    /// What average and mean report for a section without entries
    #[serde(default)]
    pub empty_collections: EmptyCollectionPolicy,
}

fn default_metric_attribute() -> String {
    "lloc".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_path: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading lloc-report configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_path.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading lloc-report configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the metric attribute is empty or contains whitespace
    fn validate(&self) -> Result<()> {
        if self.metric_attribute.is_empty() {
            return Err(app_err!("metric_attribute must not be empty"));
        }

        if self.metric_attribute.chars().any(char::is_whitespace) {
            return Err(app_err!(
                "metric_attribute must be a single XML attribute name, got '{}'",
                self.metric_attribute
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
