//! Locale-bound service construction

use std::sync::Arc;

use unitext_core::{BoundaryKind, CollationOptions};

use crate::cache::ResourceCache;
use crate::collate::Collator;
use crate::error::Result;
use crate::locale::{Locale, LocaleOrIdentifier};
use crate::segment::{
    BoundaryIterator, GraphemeSegmenter, LineSegmenter, SentenceSegmenter, WordSegmenter,
};

/// Builds pre-configured engines for one resolved locale
///
/// Every service it hands out draws its engine from the shared cache, so a
/// factory is cheap to create per request.
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    locale: Locale,
    cache: Arc<ResourceCache>,
}

impl ServiceFactory {
    /// Resolve `locale` and bind it to `cache`, or to a private cache when `None`
    pub fn new(
        locale: impl Into<LocaleOrIdentifier>,
        cache: Option<Arc<ResourceCache>>,
    ) -> Result<Self> {
        let locale = locale.into().resolve()?;
        let cache = cache.unwrap_or_else(ResourceCache::shared);
        Ok(Self { locale, cache })
    }

    /// Resolved locale
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Cache backing this factory
    pub fn cache(&self) -> &Arc<ResourceCache> {
        &self.cache
    }

    /// Collator configured by `options`
    pub fn collator(&self, options: CollationOptions) -> Result<Collator> {
        Collator::cached(&self.locale, options, &self.cache)
    }

    /// Grapheme segmenter
    pub fn grapheme_segmenter(&self) -> GraphemeSegmenter {
        GraphemeSegmenter::with_cache(&self.locale, Arc::clone(&self.cache))
    }

    /// Word segmenter keeping every token
    pub fn word_segmenter(&self) -> WordSegmenter {
        WordSegmenter::with_cache(&self.locale, Arc::clone(&self.cache))
    }

    /// Sentence segmenter
    pub fn sentence_segmenter(&self) -> SentenceSegmenter {
        SentenceSegmenter::with_cache(&self.locale, Arc::clone(&self.cache))
    }

    /// Line segmenter
    pub fn line_segmenter(&self) -> LineSegmenter {
        LineSegmenter::with_cache(&self.locale, Arc::clone(&self.cache))
    }

    /// Raw boundary iterator for `kind`
    pub fn boundary_iterator(&self, kind: BoundaryKind) -> Result<BoundaryIterator> {
        BoundaryIterator::cached(kind, &self.locale, &self.cache)
    }
}
