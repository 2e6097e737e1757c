//! Locale-aware segmentation and collation engines
//!
//! This crate layers the unitext contract over ICU4X compiled data:
//! locale resolution, boundary iteration with UTF-16 to UTF-8 offset
//! translation, collation with sort keys, and a bounded cache of engine
//! objects shared through [`ServiceFactory`].

#![warn(missing_docs)]

pub mod backend;
pub mod cache;
pub mod collate;
pub mod config;
pub mod error;
pub mod factory;
pub mod locale;
pub mod segment;

// Re-export key types
pub use backend::KindSegmenter;
pub use cache::{BoundedCache, CacheCapacity, CacheStats, ResourceCache};
pub use collate::Collator;
pub use config::{EngineConfig, EngineConfigBuilder};
pub use error::{EngineError, Result};
pub use factory::ServiceFactory;
pub use locale::{available_locales, default_locale, resolve, Locale, LocaleOrIdentifier};
pub use segment::{
    BoundaryIterator, GraphemeSegmenter, IteratorState, LineSegmenter, PositionedSegments,
    SentenceSegmenter, Segments, WordSegmenter,
};

// Re-export from core for convenience
pub use unitext_core::{
    internal_offset_to_native_index, BoundaryKind, BoundarySet, CaseFirst, CollationKey,
    CollationOptions, Strength, TokenFilter,
};
