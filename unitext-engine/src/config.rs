//! Configuration types for the engine

use std::sync::Arc;

use crate::cache::{CacheCapacity, ResourceCache};
use crate::error::Result;
use crate::locale::{self, Locale};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Locale used when callers give none (None = process default)
    pub default_locale: Option<String>,
    /// Resource cache capacities
    pub cache: CacheCapacity,
}

impl EngineConfig {
    /// Configuration with a fixed default locale
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            default_locale: Some(locale.into()),
            ..Default::default()
        }
    }

    /// Small caches for short-lived processes such as a CLI invocation
    pub fn minimal() -> Self {
        Self {
            default_locale: None,
            cache: CacheCapacity {
                collators: 4,
                segmenters: 4,
            },
        }
    }

    /// Check capacities and the default locale
    pub fn validate(&self) -> Result<()> {
        self.cache.validate()?;
        if let Some(id) = &self.default_locale {
            locale::resolve(id)?;
        }
        Ok(())
    }

    /// Locale to use when none is given
    pub fn resolve_default_locale(&self) -> Result<Locale> {
        match &self.default_locale {
            Some(id) => locale::resolve(id),
            None => Ok(locale::default_locale()),
        }
    }

    /// Fresh shared cache sized by this configuration
    pub fn build_cache(&self) -> Arc<ResourceCache> {
        Arc::new(ResourceCache::with_capacity(self.cache))
    }
}

/// Builder for [`EngineConfig`]
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default locale
    pub fn default_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.config.default_locale = Some(locale.into());
        self
    }

    /// Set the collator cache capacity
    pub fn collator_capacity(mut self, capacity: usize) -> Self {
        self.config.cache.collators = capacity;
        self
    }

    /// Set the segmenter cache capacity
    pub fn segmenter_capacity(mut self, capacity: usize) -> Self {
        self.config.cache.segmenters = capacity;
        self
    }

    /// Set both capacities
    pub fn cache_capacity(mut self, capacity: CacheCapacity) -> Self {
        self.config.cache = capacity;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
