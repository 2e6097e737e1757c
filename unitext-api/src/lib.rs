//! Public API for unitext segmentation and collation
//!
//! This crate provides a stable interface over the engine crate: a
//! [`TextAnalyzer`] bound to one locale and a shared resource cache, plus
//! serializable outputs.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::{ordering_name, Metadata, SegmentDTO};
use error::Result;
use std::sync::Arc;
use std::time::Instant;
use unitext_engine::{Collator, Locale, ResourceCache, ServiceFactory};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{BoundaryOutput, CollationOutput, Input, Segment, SegmentationOutput, SortOutput};
#[cfg(feature = "serde")]
pub use dto::ToJson;
pub use error::ApiError;
pub use unitext_engine::{
    available_locales, BoundaryKind, CacheStats, CaseFirst, CollationOptions, Strength,
    TokenFilter,
};

/// Main entry point for segmentation and collation
///
/// Engines are drawn from a cache shared by every analyzer derived through
/// [`for_locale`](Self::for_locale).
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    factory: ServiceFactory,
    config: Config,
}

impl TextAnalyzer {
    /// Analyzer for the process default locale
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Analyzer for a specific locale
    pub fn with_locale(locale: &str) -> Result<Self> {
        let config = Config::builder().locale(locale).build()?;
        Self::with_config(config)
    }

    /// Analyzer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let locale = config.engine.resolve_default_locale()?;
        let cache = config.engine.build_cache();
        let factory = ServiceFactory::new(locale, Some(cache))?;
        Ok(Self { factory, config })
    }

    /// Analyzer for another locale sharing this one's cache and options
    pub fn for_locale(&self, locale: &str) -> Result<Self> {
        let factory = ServiceFactory::new(locale, Some(Arc::clone(self.factory.cache())))?;
        Ok(Self {
            factory,
            config: self.config.clone(),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the resolved locale
    pub fn locale(&self) -> &Locale {
        self.factory.locale()
    }

    /// Shared resource cache
    pub fn cache(&self) -> &Arc<ResourceCache> {
        self.factory.cache()
    }

    /// Split input into segments of `kind`
    ///
    /// Word segmentation applies the configured token filter; other kinds
    /// return every segment.
    pub fn segment(&self, kind: BoundaryKind, input: Input) -> Result<SegmentationOutput> {
        let start = Instant::now();
        let text = input.read_text()?;

        let filter = match kind {
            BoundaryKind::Word => self.config.word_filter,
            _ => TokenFilter::NONE,
        };

        let mut iter = self.factory.boundary_iterator(kind)?;
        let mut segments = Vec::new();
        let mut chars_before = 0;
        let mut counted_to = 0;
        for (range, segment) in iter.segments_with_offsets(&text) {
            chars_before += text[counted_to..range.start].chars().count();
            counted_to = range.start;
            if filter.accepts(segment) {
                segments.push(SegmentDTO {
                    text: segment.to_string(),
                    start: range.start,
                    end: range.end,
                    char_start: chars_before,
                });
            }
        }

        Ok(SegmentationOutput {
            segments,
            metadata: self.metadata(kind, &text, start),
        })
    }

    /// Segment text directly (convenience method)
    pub fn segment_text(&self, kind: BoundaryKind, text: &str) -> Result<SegmentationOutput> {
        self.segment(kind, Input::from_text(text))
    }

    /// Boundary offsets of `kind`
    pub fn boundaries(&self, kind: BoundaryKind, input: Input) -> Result<BoundaryOutput> {
        let start = Instant::now();
        let text = input.read_text()?;
        let mut iter = self.factory.boundary_iterator(kind)?;
        let offsets = iter.boundaries(&text)?.into_vec();
        Ok(BoundaryOutput {
            offsets,
            metadata: self.metadata(kind, &text, start),
        })
    }

    /// Collator using the configured options
    pub fn collator(&self) -> Result<Collator> {
        self.collator_with(self.config.collation)
    }

    /// Collator with explicit options
    pub fn collator_with(&self, options: CollationOptions) -> Result<Collator> {
        Ok(self.factory.collator(options)?)
    }

    /// Compare two strings
    pub fn compare(&self, left: &str, right: &str) -> Result<CollationOutput> {
        let collator = self.collator()?;
        let ordering = collator.compare(left, right);
        Ok(CollationOutput {
            left: left.to_string(),
            right: right.to_string(),
            ordering: ordering_name(ordering).to_string(),
            locale: self.locale().language_tag(),
            strength: collator.strength().to_string(),
        })
    }

    /// Sort strings in collation order
    pub fn sort<I, S>(&self, strings: I) -> Result<SortOutput>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = self.collator()?.sort(strings)?;
        Ok(SortOutput {
            items,
            locale: self.locale().language_tag(),
        })
    }

    /// Sort the lines of an input
    pub fn sort_lines(&self, input: Input) -> Result<SortOutput> {
        let text = input.read_text()?;
        self.sort(text.lines())
    }

    fn metadata(&self, kind: BoundaryKind, text: &str, start: Instant) -> Metadata {
        Metadata {
            kind: kind.name().to_string(),
            locale: self.locale().language_tag(),
            total_bytes: text.len(),
            total_chars: text.chars().count(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

// Convenience functions

/// Segment text with a throwaway analyzer
pub fn segment_text(kind: BoundaryKind, text: &str, locale: &str) -> Result<SegmentationOutput> {
    TextAnalyzer::with_config(Config::builder().minimal().locale(locale).build()?)?
        .segment_text(kind, text)
}

/// Segment a file with a throwaway analyzer
pub fn segment_file<P: AsRef<std::path::Path>>(
    kind: BoundaryKind,
    path: P,
    locale: &str,
) -> Result<SegmentationOutput> {
    TextAnalyzer::with_config(Config::builder().minimal().locale(locale).build()?)?
        .segment(kind, Input::from_file(path.as_ref().to_path_buf()))
}

/// Compare two strings with default collation options
pub fn compare_strings(left: &str, right: &str, locale: &str) -> Result<CollationOutput> {
    TextAnalyzer::with_config(Config::builder().minimal().locale(locale).build()?)?
        .compare(left, right)
}

/// Sort strings with default collation options
pub fn sort_strings<I, S>(strings: I, locale: &str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let analyzer = TextAnalyzer::with_config(Config::builder().minimal().locale(locale).build()?)?;
    Ok(analyzer.sort(strings)?.items)
}
