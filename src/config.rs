use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::{ReportOptions, DEFAULT_REPORT_FILENAME};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub triage: TriageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Where the report is written, relative to the working directory
    #[serde(default = "default_report_filename")]
    pub filename: String,
    /// Include the question/answer transcript in the report
    #[serde(default = "default_true")]
    pub include_answers: bool,
    /// Wrap width for advice text
    #[serde(default = "default_width")]
    pub width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TriageConfig {
    /// Drop zero-score conditions from the shortlist
    #[serde(default)]
    pub matched_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_report_filename() -> String {
    DEFAULT_REPORT_FILENAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_width() -> usize {
    72
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            // Create default config
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".symptombuddy").join("config.toml"))
    }

    /// Report layout options derived from the config
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            width: self.report.width,
            include_answers: self.report.include_answers,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            filename: default_report_filename(),
            include_answers: true,
            width: default_width(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { color: true }
    }
}
