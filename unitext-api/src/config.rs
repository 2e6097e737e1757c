//! High-level configuration API

use crate::error::{ApiError, Result};
use unitext_engine::{
    CacheCapacity, CaseFirst, CollationOptions, EngineConfig, Strength, TokenFilter,
};

/// High-level configuration for a [`TextAnalyzer`](crate::TextAnalyzer)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub(crate) engine: EngineConfig,
    pub(crate) collation: CollationOptions,
    pub(crate) word_filter: TokenFilter,
}

impl Config {
    /// Configuration sized for one-shot processes
    pub fn minimal() -> Self {
        Self {
            engine: EngineConfig::minimal(),
            ..Default::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Engine settings
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Collation options used when none are given per call
    pub fn collation(&self) -> CollationOptions {
        self.collation
    }

    /// Filter applied to word segmentation
    pub fn word_filter(&self) -> TokenFilter {
        self.word_filter
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the locale used when callers give none
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.engine.default_locale = Some(locale.into());
        self
    }

    /// Set the collation strength by name
    pub fn strength(mut self, strength: &str) -> Result<Self> {
        self.config.collation.strength = strength
            .parse::<Strength>()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self)
    }

    /// Compare digit runs numerically
    pub fn numeric(mut self, numeric: bool) -> Self {
        self.config.collation.numeric = numeric;
        self
    }

    /// Set case ordering
    pub fn case_first(mut self, case_first: CaseFirst) -> Self {
        self.config.collation.case_first = case_first;
        self
    }

    /// Enable the case level
    pub fn case_level(mut self, case_level: bool) -> Self {
        self.config.collation.case_level = case_level;
        self
    }

    /// Replace all collation options at once
    pub fn collation(mut self, options: CollationOptions) -> Self {
        self.config.collation = options;
        self
    }

    /// Drop whitespace-only word tokens
    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.config.word_filter.skip_whitespace = skip;
        self
    }

    /// Drop word tokens without letters or digits
    pub fn skip_punctuation(mut self, skip: bool) -> Self {
        self.config.word_filter.skip_punctuation = skip;
        self
    }

    /// Use the small cache sizes of [`Config::minimal`]
    pub fn minimal(mut self) -> Self {
        self.config.engine.cache = EngineConfig::minimal().cache;
        self
    }

    /// Set cache capacities
    pub fn cache_capacity(mut self, collators: usize, segmenters: usize) -> Self {
        self.config.engine.cache = CacheCapacity {
            collators,
            segmenters,
        };
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.engine.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_options() {
        let config = Config::builder()
            .locale("de")
            .strength("primary")
            .unwrap()
            .numeric(true)
            .case_first(CaseFirst::Upper)
            .skip_punctuation(true)
            .build()
            .unwrap();

        assert_eq!(config.engine().default_locale.as_deref(), Some("de"));
        assert_eq!(config.collation().strength, Strength::Primary);
        assert!(config.collation().numeric);
        assert_eq!(config.collation().case_first, CaseFirst::Upper);
        assert!(config.word_filter().skip_punctuation);
        assert!(!config.word_filter().skip_whitespace);
    }

    #[test]
    fn test_invalid_strength() {
        let err = Config::builder().strength("loud").unwrap_err();
        assert!(err.to_string().contains("invalid strength 'loud'"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Config::builder().cache_capacity(0, 8).build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_invalid_locale_rejected() {
        assert!(Config::builder().locale("!!").build().is_err());
    }
}
