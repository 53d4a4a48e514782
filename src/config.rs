//! Configuration loading and validation

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
///
/// Passed explicitly to [`crate::pipeline::run`]; nothing in the pipeline
/// reads process-wide settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// JSON file holding the transaction list
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// CSV file receiving `wallet_address,score` rows
    #[serde(default = "default_scores_path")]
    pub scores_path: PathBuf,
    /// CSV file receiving the per-wallet feature table
    #[serde(default = "default_features_path")]
    pub features_path: PathBuf,
    /// Write the feature table alongside the scores
    #[serde(default = "default_true")]
    pub write_features: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            scores_path: default_scores_path(),
            features_path: default_features_path(),
            write_features: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json: bool,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("data/user-transactions.json")
}

fn default_scores_path() -> PathBuf {
    PathBuf::from("wallet_scores.csv")
}

fn default_features_path() -> PathBuf {
    PathBuf::from("data/wallet_features.csv")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from file and environment variables
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let settings = config::Config::builder()
            // Start with defaults
            .set_default("input.path", path_default(default_input_path()))?
            .set_default("output.scores_path", path_default(default_scores_path()))?
            .set_default("output.features_path", path_default(default_features_path()))?
            .set_default("output.write_features", default_true())?
            .set_default("logging.json", false)?
            // Load from file if exists
            .add_source(config::File::from(path).required(false))
            // Override with environment variables (prefix CREDIT__)
            .add_source(
                config::Environment::with_prefix("CREDIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: Config = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input.path.as_os_str().is_empty() {
            anyhow::bail!("input.path must not be empty");
        }

        if self.output.scores_path.as_os_str().is_empty() {
            anyhow::bail!("output.scores_path must not be empty");
        }

        if self.output.write_features {
            if self.output.features_path.as_os_str().is_empty() {
                anyhow::bail!("output.features_path must not be empty when write_features is set");
            }
            if self.output.features_path == self.output.scores_path {
                anyhow::bail!(
                    "output.features_path and output.scores_path both point to {}",
                    self.output.scores_path.display()
                );
            }
        }

        Ok(())
    }

    /// Get configuration for display
    pub fn summary(&self) -> String {
        format!(
            r#"Configuration:
  Input:
    path: {}
  Output:
    scores_path: {}
    features_path: {}
    write_features: {}
  Logging:
    json: {}
"#,
            self.input.path.display(),
            self.output.scores_path.display(),
            self.output.features_path.display(),
            self.output.write_features,
            self.logging.json,
        )
    }
}

fn path_default(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}
