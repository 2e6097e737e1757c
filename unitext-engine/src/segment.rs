//! Boundary engine
//!
//! A [`BoundaryIterator`] owns a shared break engine and a reusable UTF-16
//! buffer. Binding text encodes it into the buffer; walking the buffer yields
//! UTF-16 break offsets which are translated back to byte indices of the
//! caller's `str`, so every segment is a zero-copy slice of the input.
//!
//! ```no_run
//! use unitext_engine::segment::{sentences, words};
//!
//! let text = "Hello world. How are you? I'm fine!";
//! assert_eq!(sentences(text, "en-US")?.len(), 3);
//! assert_eq!(words("Hello, world!", "en")?, ["Hello", "world"]);
//! # Ok::<(), unitext_engine::EngineError>(())
//! ```

use std::ops::Range;
use std::sync::Arc;

use unitext_core::{BoundaryKind, BoundarySet, OffsetTranslator, TokenFilter};

use crate::backend::KindSegmenter;
use crate::cache::ResourceCache;
use crate::error::Result;
use crate::locale::{Locale, LocaleOrIdentifier};

/// Lifecycle of a [`BoundaryIterator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorState {
    /// No text bound yet
    Uninitialized,
    /// Text bound, walk not finished
    TextBound,
    /// Walk over the bound text finished; binding new text restarts
    Exhausted,
}

/// Reusable break iterator for one boundary kind and locale
///
/// Mutated through `&mut self`, so a bound iterator is never shared between
/// threads. The break engine itself is an immutable shared handle.
pub struct BoundaryIterator {
    segmenter: Arc<KindSegmenter>,
    locale: Locale,
    wide: Vec<u16>,
    state: IteratorState,
}

impl BoundaryIterator {
    /// Build an iterator with its own break engine.
    ///
    /// `LocaleOrIdentifier::Default` selects the process default locale.
    pub fn new(kind: BoundaryKind, locale: impl Into<LocaleOrIdentifier>) -> Result<Self> {
        let locale = locale.into().resolve()?;
        let segmenter = Arc::new(KindSegmenter::build(kind, &locale)?);
        Ok(Self::from_parts(segmenter, locale))
    }

    /// Build an iterator whose break engine is drawn from `cache`
    pub fn cached(
        kind: BoundaryKind,
        locale: impl Into<LocaleOrIdentifier>,
        cache: &ResourceCache,
    ) -> Result<Self> {
        let locale = locale.into().resolve()?;
        let segmenter = cache.segmenter(kind, &locale)?;
        Ok(Self::from_parts(segmenter, locale))
    }

    pub(crate) fn from_parts(segmenter: Arc<KindSegmenter>, locale: Locale) -> Self {
        Self {
            segmenter,
            locale,
            wide: Vec::new(),
            state: IteratorState::Uninitialized,
        }
    }

    /// Boundary kind
    pub fn kind(&self) -> BoundaryKind {
        self.segmenter.kind()
    }

    /// Locale the engine was built for
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Current lifecycle state
    pub fn state(&self) -> IteratorState {
        self.state
    }

    /// Bind `text`, replacing any previously bound text.
    ///
    /// Reuses the internal buffer; no engine is rebuilt.
    pub fn set_text(&mut self, text: &str) {
        unitext_core::encode_wide(text, &mut self.wide);
        self.state = IteratorState::TextBound;
        tracing::trace!(kind = %self.kind(), bytes = text.len(), "bound text");
    }

    /// Bind `text` and walk it lazily, yielding each segment as a slice of `text`
    pub fn segments<'i, 't>(&'i mut self, text: &'t str) -> Segments<'i, 't> {
        self.set_text(text);
        let Self {
            segmenter,
            wide,
            state,
            ..
        } = self;
        Segments {
            breaks: segmenter.segment_utf16(wide),
            translator: OffsetTranslator::new(text),
            text,
            position: 0,
            filter: TokenFilter::NONE,
            state,
        }
    }

    /// Like [`segments`](Self::segments) but each item carries its byte range
    pub fn segments_with_offsets<'i, 't>(
        &'i mut self,
        text: &'t str,
    ) -> PositionedSegments<'i, 't> {
        PositionedSegments {
            inner: self.segments(text),
        }
    }

    /// Bind `text` and collect every boundary, `0` and `text.len()` included
    pub fn boundaries(&mut self, text: &str) -> Result<BoundarySet> {
        self.set_text(text);
        let mut translator = OffsetTranslator::new(text);
        let mut offsets = Vec::new();
        for offset in self.segmenter.segment_utf16(&self.wide) {
            offsets.push(translator.translate(offset)?);
        }
        self.state = IteratorState::Exhausted;
        Ok(BoundarySet::new(text.len(), offsets))
    }

    /// Line-break opportunities strictly inside `text`
    pub fn line_breaks(&mut self, text: &str) -> Result<Vec<usize>> {
        Ok(self.boundaries(text)?.interior().to_vec())
    }
}

impl std::fmt::Debug for BoundaryIterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryIterator")
            .field("kind", &self.kind())
            .field("locale", &self.locale)
            .field("state", &self.state)
            .finish()
    }
}

/// Lazy, forward-only sequence of segments
///
/// Created by [`BoundaryIterator::segments`]. Adjacent items share a
/// boundary, so unfiltered output concatenates back to the input.
///
/// The walk yields exactly the boundaries [`BoundaryIterator::boundaries`]
/// reports. An engine offset that cannot be mapped back to the text is
/// unreachable for input borrowed from a `&str`; release builds log it and
/// end the walk, where `boundaries` would return an error.
pub struct Segments<'i, 't> {
    breaks: Box<dyn Iterator<Item = usize> + 'i>,
    translator: OffsetTranslator<'t>,
    text: &'t str,
    position: usize,
    filter: TokenFilter,
    state: &'i mut IteratorState,
}

impl<'i, 't> Segments<'i, 't> {
    /// Drop segments rejected by `filter`; boundaries are unaffected
    pub fn filtered(mut self, filter: TokenFilter) -> Self {
        self.filter = filter;
        self
    }

    fn finish(&mut self) {
        *self.state = IteratorState::Exhausted;
    }

    fn next_raw(&mut self) -> Option<Range<usize>> {
        loop {
            let end = match self.breaks.next() {
                Some(offset) => match self.translator.translate(offset) {
                    Ok(end) => end,
                    Err(e) => {
                        // UTF-16 encoded from a &str has no lone surrogates, so
                        // the engine cannot report an offset inside a pair
                        debug_assert!(false, "break engine reported an unusable offset: {e}");
                        tracing::error!(error = %e, "break engine reported an unusable offset");
                        self.finish();
                        return None;
                    }
                },
                None => {
                    // the engine always reports the end of text; cover it regardless
                    if self.position < self.text.len() {
                        self.text.len()
                    } else {
                        self.finish();
                        return None;
                    }
                }
            };
            if end <= self.position {
                continue;
            }
            let range = self.position..end;
            self.position = end;
            return Some(range);
        }
    }

    fn next_positioned(&mut self) -> Option<(Range<usize>, &'t str)> {
        while let Some(range) = self.next_raw() {
            let text = self.text;
            let segment = &text[range.clone()];
            if self.filter.accepts(segment) {
                return Some((range, segment));
            }
        }
        None
    }
}

impl<'i, 't> Iterator for Segments<'i, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_positioned().map(|(_, segment)| segment)
    }
}

/// Segments paired with their byte ranges in the source text
pub struct PositionedSegments<'i, 't> {
    inner: Segments<'i, 't>,
}

impl<'i, 't> PositionedSegments<'i, 't> {
    /// Drop segments rejected by `filter`
    pub fn filtered(self, filter: TokenFilter) -> Self {
        Self {
            inner: self.inner.filtered(filter),
        }
    }
}

impl<'i, 't> Iterator for PositionedSegments<'i, 't> {
    type Item = (Range<usize>, &'t str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_positioned()
    }
}

/// Where a typed segmenter gets its break engine from
#[derive(Debug, Clone)]
enum EngineSource {
    Owned,
    Cached(Arc<ResourceCache>),
}

/// Shared plumbing for the typed segmenters: builds the iterator on first use
#[derive(Debug)]
struct LazyIterator {
    kind: BoundaryKind,
    locale: Locale,
    source: EngineSource,
    filter: TokenFilter,
    iter: Option<BoundaryIterator>,
}

impl LazyIterator {
    fn new(kind: BoundaryKind, locale: &Locale, source: EngineSource) -> Self {
        Self {
            kind,
            locale: locale.clone(),
            source,
            filter: TokenFilter::NONE,
            iter: None,
        }
    }

    fn get(&mut self) -> Result<&mut BoundaryIterator> {
        let iter = match self.iter.take() {
            Some(iter) => iter,
            None => match &self.source {
                EngineSource::Owned => BoundaryIterator::new(self.kind, &self.locale)?,
                EngineSource::Cached(cache) => {
                    BoundaryIterator::cached(self.kind, &self.locale, cache)?
                }
            },
        };
        Ok(self.iter.insert(iter))
    }
}

macro_rules! typed_segmenter {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name {
            inner: LazyIterator,
        }

        impl $name {
            /// Segmenter for `locale` with its own break engine, built on first use
            pub fn new(locale: &Locale) -> Self {
                Self {
                    inner: LazyIterator::new($kind, locale, EngineSource::Owned),
                }
            }

            /// Resolve `locale` first; fails on an unparsable identifier
            pub fn try_new(locale: impl Into<LocaleOrIdentifier>) -> Result<Self> {
                Ok(Self::new(&locale.into().resolve()?))
            }

            /// Segmenter drawing its break engine from `cache`
            pub fn with_cache(locale: &Locale, cache: Arc<ResourceCache>) -> Self {
                Self {
                    inner: LazyIterator::new($kind, locale, EngineSource::Cached(cache)),
                }
            }

            /// Locale of this segmenter
            pub fn locale(&self) -> &Locale {
                &self.inner.locale
            }

            /// All boundaries of `text`, ignoring any token filter
            pub fn boundaries(&mut self, text: &str) -> Result<BoundarySet> {
                self.inner.get()?.boundaries(text)
            }

            /// Collect [`segment`](Self::segment) into a vector
            pub fn segment_list<'t>(&mut self, text: &'t str) -> Result<Vec<&'t str>> {
                Ok(self.segment(text)?.collect())
            }
        }
    };
}

typed_segmenter!(
    /// Splits text into user-perceived characters
    ///
    /// Grapheme rules are locale independent; the locale is kept for
    /// reporting only.
    GraphemeSegmenter,
    BoundaryKind::Grapheme
);

typed_segmenter!(
    /// Splits text into words and the runs between them
    WordSegmenter,
    BoundaryKind::Word
);

typed_segmenter!(
    /// Splits text into sentences
    SentenceSegmenter,
    BoundaryKind::Sentence
);

typed_segmenter!(
    /// Splits text at line-break opportunities
    LineSegmenter,
    BoundaryKind::Line
);

impl GraphemeSegmenter {
    /// Lazily segment `text`
    pub fn segment<'i, 't>(&'i mut self, text: &'t str) -> Result<Segments<'i, 't>> {
        Ok(self.inner.get()?.segments(text))
    }
}

impl SentenceSegmenter {
    /// Lazily segment `text`
    pub fn segment<'i, 't>(&'i mut self, text: &'t str) -> Result<Segments<'i, 't>> {
        Ok(self.inner.get()?.segments(text))
    }
}

impl LineSegmenter {
    /// Lazily segment `text`
    pub fn segment<'i, 't>(&'i mut self, text: &'t str) -> Result<Segments<'i, 't>> {
        Ok(self.inner.get()?.segments(text))
    }

    /// Line-break opportunities strictly inside `text`
    pub fn line_breaks(&mut self, text: &str) -> Result<Vec<usize>> {
        self.inner.get()?.line_breaks(text)
    }
}

impl WordSegmenter {
    /// Drop whitespace-only tokens
    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.inner.filter.skip_whitespace = skip;
        self
    }

    /// Drop tokens without any alphanumeric character
    pub fn skip_punctuation(mut self, skip: bool) -> Self {
        self.inner.filter.skip_punctuation = skip;
        self
    }

    /// Replace the token filter
    pub fn with_filter(mut self, filter: TokenFilter) -> Self {
        self.inner.filter = filter;
        self
    }

    /// Active token filter
    pub fn filter(&self) -> TokenFilter {
        self.inner.filter
    }

    /// Lazily segment `text`, applying the token filter
    pub fn segment<'i, 't>(&'i mut self, text: &'t str) -> Result<Segments<'i, 't>> {
        let filter = self.inner.filter;
        Ok(self.inner.get()?.segments(text).filtered(filter))
    }
}

fn segments_of<'t>(
    kind: BoundaryKind,
    text: &'t str,
    locale: impl Into<LocaleOrIdentifier>,
    filter: TokenFilter,
) -> Result<Vec<&'t str>> {
    let mut iter = BoundaryIterator::new(kind, locale)?;
    let segments = iter.segments(text).filtered(filter).collect();
    Ok(segments)
}

/// Grapheme clusters of `text`
pub fn graphemes(text: &str, locale: impl Into<LocaleOrIdentifier>) -> Result<Vec<&str>> {
    segments_of(BoundaryKind::Grapheme, text, locale, TokenFilter::NONE)
}

/// Words of `text`, skipping whitespace and punctuation-only tokens
pub fn words(text: &str, locale: impl Into<LocaleOrIdentifier>) -> Result<Vec<&str>> {
    segments_of(BoundaryKind::Word, text, locale, TokenFilter::WORDS_ONLY)
}

/// Word-level tokens of `text` under an explicit filter
pub fn words_with(
    text: &str,
    locale: impl Into<LocaleOrIdentifier>,
    filter: TokenFilter,
) -> Result<Vec<&str>> {
    segments_of(BoundaryKind::Word, text, locale, filter)
}

/// Sentences of `text`, each keeping its terminator and trailing space
pub fn sentences(text: &str, locale: impl Into<LocaleOrIdentifier>) -> Result<Vec<&str>> {
    segments_of(BoundaryKind::Sentence, text, locale, TokenFilter::NONE)
}

/// Pieces of `text` between line-break opportunities
pub fn lines(text: &str, locale: impl Into<LocaleOrIdentifier>) -> Result<Vec<&str>> {
    segments_of(BoundaryKind::Line, text, locale, TokenFilter::NONE)
}

/// Line-break opportunities strictly inside `text`
pub fn line_breaks(text: &str, locale: impl Into<LocaleOrIdentifier>) -> Result<Vec<usize>> {
    BoundaryIterator::new(BoundaryKind::Line, locale)?.line_breaks(text)
}

/// Boundaries of `text` for `kind`
pub fn boundaries(
    kind: BoundaryKind,
    text: &str,
    locale: impl Into<LocaleOrIdentifier>,
) -> Result<BoundarySet> {
    BoundaryIterator::new(kind, locale)?.boundaries(text)
}
