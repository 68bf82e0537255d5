pub mod cli;
pub mod toml_config;

use crate::core::session::DEFAULT_QUIT_TOKEN;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "result.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Parser)]
#[command(name = "seller-stats")]
#[command(about = "Collect seller records, rank them by sales and write a tiered report")]
pub struct CliConfig {
    /// File the report is written to (overwritten every round)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exact answer that ends the session
    #[arg(long)]
    pub quit_token: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings the session runs with after merging all sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub output_path: String,
    pub quit_token: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            quit_token: DEFAULT_QUIT_TOKEN.to_string(),
        }
    }
}

impl SessionConfig {
    /// Command-line values win over the file, the file over defaults.
    pub fn resolve(
        output: Option<String>,
        quit_token: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        let section = file.and_then(|f| f.session.as_ref());

        Self {
            output_path: output
                .or_else(|| section.and_then(|s| s.output_path.clone()))
                .unwrap_or(defaults.output_path),
            quit_token: quit_token
                .or_else(|| section.and_then(|s| s.quit_token.clone()))
                .unwrap_or(defaults.quit_token),
        }
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load(&self) -> Result<SessionConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        Ok(SessionConfig::resolve(
            self.output.clone(),
            self.quit_token.clone(),
            file.as_ref(),
        ))
    }
}

impl ConfigProvider for SessionConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn quit_token(&self) -> &str {
        &self.quit_token
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("quit_token", &self.quit_token)?;
        Ok(())
    }
}
