//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use unitext_api::{CaseFirst, CollationOptions, Config, ConfigBuilder, Strength};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Locale configuration
    #[serde(default)]
    pub locale: LocaleConfig,

    /// Collation defaults
    #[serde(default)]
    pub collation: CollationConfig,

    /// Cache sizes
    #[serde(default)]
    pub cache: CacheConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Locale-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct LocaleConfig {
    /// Locale used when a command gets none (unset = environment)
    pub default: Option<String>,
}

/// Collation defaults applied before command-line flags
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CollationConfig {
    /// primary, secondary, tertiary, quaternary or identical
    pub strength: String,

    /// Compare digit runs as numbers
    pub numeric: bool,

    /// upper, lower or off
    pub case_first: String,

    /// Separate case level
    pub case_level: bool,
}

impl Default for CollationConfig {
    fn default() -> Self {
        Self {
            strength: "tertiary".to_string(),
            numeric: false,
            case_first: "off".to_string(),
            case_level: false,
        }
    }
}

/// Cache capacity configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached collators
    pub collators: usize,

    /// Maximum cached break engines
    pub segmenters: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            collators: 4,
            segmenters: 4,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.collation_options()?;
        config.output_format()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Collation options described by the `[collation]` section
    pub fn collation_options(&self) -> Result<CollationOptions> {
        let strength = self
            .collation
            .strength
            .parse::<Strength>()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let case_first = self
            .collation
            .case_first
            .parse::<CaseFirst>()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(CollationOptions::with_strength(strength)
            .numeric(self.collation.numeric)
            .case_first(case_first)
            .case_level(self.collation.case_level))
    }

    /// Default output format from the `[output]` section
    pub fn output_format(&self) -> Result<OutputFormat> {
        Ok(self.output.format.parse::<OutputFormat>()?)
    }

    /// Analyzer builder seeded from this file, for `locale` or `[locale] default`
    pub fn analyzer_builder(&self, locale: Option<&str>) -> Result<ConfigBuilder> {
        let mut builder = Config::builder()
            .collation(self.collation_options()?)
            .cache_capacity(self.cache.collators, self.cache.segmenters);
        if let Some(locale) = locale.or(self.locale.default.as_deref()) {
            builder = builder.locale(locale);
        }
        Ok(builder)
    }
}
