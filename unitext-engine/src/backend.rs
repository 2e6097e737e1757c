//! Construction of ICU4X engine objects
//!
//! Everything that touches `icu_segmenter` or `icu_collator` constructors
//! lives here; the rest of the crate works with [`KindSegmenter`] and
//! [`icu_collator::Collator`] handles.

use icu_collator::options::{CaseLevel, CollatorOptions, Strength as IcuStrength};
use icu_collator::preferences::{CollationCaseFirst, CollationNumericOrdering};
use icu_collator::CollatorPreferences;
use icu_segmenter::options::{LineBreakOptions, SentenceBreakOptions, WordBreakOptions};
use unitext_core::{BoundaryKind, CaseFirst, CollationOptions, Strength};

use crate::error::{EngineError, Result};
use crate::locale::Locale;

/// A compiled break engine for one boundary kind
///
/// Immutable after construction and shared through `Arc`.
pub enum KindSegmenter {
    /// Extended grapheme clusters; locale independent
    Grapheme(icu_segmenter::GraphemeClusterSegmenter),
    /// Word breaks, dictionary or LSTM backed for scripts without spaces
    Word(icu_segmenter::WordSegmenter),
    /// Sentence breaks with locale overrides
    Sentence(icu_segmenter::SentenceSegmenter),
    /// Line-break opportunities
    Line(icu_segmenter::LineSegmenter),
}

impl KindSegmenter {
    /// Build the engine for `kind`, tailored to `locale` where the data allows
    pub fn build(kind: BoundaryKind, locale: &Locale) -> Result<Self> {
        tracing::debug!(%kind, locale = %locale, "building break engine");
        let content_locale = locale.content_locale();

        let segmenter = match kind {
            BoundaryKind::Grapheme => KindSegmenter::Grapheme(
                icu_segmenter::GraphemeClusterSegmenter::new().static_to_owned(),
            ),
            BoundaryKind::Word => {
                let mut options = WordBreakOptions::default();
                options.content_locale = content_locale;
                let engine = icu_segmenter::WordSegmenter::try_new_auto(options).map_err(|e| {
                    EngineError::segmentation(format!(
                        "Failed to create {kind} iterator for '{locale}': {e}"
                    ))
                })?;
                KindSegmenter::Word(engine)
            }
            BoundaryKind::Sentence => {
                let mut options = SentenceBreakOptions::default();
                options.content_locale = content_locale;
                let engine = icu_segmenter::SentenceSegmenter::try_new(options).map_err(|e| {
                    EngineError::segmentation(format!(
                        "Failed to create {kind} iterator for '{locale}': {e}"
                    ))
                })?;
                KindSegmenter::Sentence(engine)
            }
            BoundaryKind::Line => {
                let mut options = LineBreakOptions::default();
                options.content_locale = content_locale;
                KindSegmenter::Line(icu_segmenter::LineSegmenter::new_auto(options).static_to_owned())
            }
        };
        Ok(segmenter)
    }

    /// Boundary kind this engine finds
    pub fn kind(&self) -> BoundaryKind {
        match self {
            KindSegmenter::Grapheme(_) => BoundaryKind::Grapheme,
            KindSegmenter::Word(_) => BoundaryKind::Word,
            KindSegmenter::Sentence(_) => BoundaryKind::Sentence,
            KindSegmenter::Line(_) => BoundaryKind::Line,
        }
    }

    /// Break positions in `wide`, as UTF-16 offsets in increasing order
    pub fn segment_utf16<'a>(&'a self, wide: &'a [u16]) -> Box<dyn Iterator<Item = usize> + 'a> {
        match self {
            KindSegmenter::Grapheme(s) => Box::new(s.as_borrowed().segment_utf16(wide)),
            KindSegmenter::Word(s) => Box::new(s.as_borrowed().segment_utf16(wide)),
            KindSegmenter::Sentence(s) => Box::new(s.as_borrowed().segment_utf16(wide)),
            KindSegmenter::Line(s) => Box::new(s.as_borrowed().segment_utf16(wide)),
        }
    }
}

impl std::fmt::Debug for KindSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KindSegmenter({})", self.kind())
    }
}

fn icu_strength(strength: Strength) -> IcuStrength {
    match strength {
        Strength::Primary => IcuStrength::Primary,
        Strength::Secondary => IcuStrength::Secondary,
        Strength::Tertiary => IcuStrength::Tertiary,
        Strength::Quaternary => IcuStrength::Quaternary,
        Strength::Identical => IcuStrength::Identical,
    }
}

/// Build a collator for `locale` configured by `options`
///
/// Numeric ordering and case-first travel as locale preferences, strength and
/// case level as collator options. Unicode extension keywords already present
/// in the locale tag apply unless overridden here.
pub fn build_collator(locale: &Locale, options: CollationOptions) -> Result<icu_collator::Collator> {
    tracing::debug!(locale = %locale, ?options, "building collator");

    let mut prefs = CollatorPreferences::from(locale.as_icu());
    if options.numeric {
        prefs.numeric_ordering = Some(CollationNumericOrdering::True);
    }
    match options.case_first {
        CaseFirst::Upper => prefs.case_first = Some(CollationCaseFirst::Upper),
        CaseFirst::Lower => prefs.case_first = Some(CollationCaseFirst::Lower),
        CaseFirst::Off => {}
    }

    let mut icu_options = CollatorOptions::default();
    icu_options.strength = Some(icu_strength(options.strength));
    if options.case_level {
        icu_options.case_level = Some(CaseLevel::On);
    }

    icu_collator::Collator::try_new(prefs, icu_options)
        .map(|borrowed| borrowed.static_to_owned())
        .map_err(|e| EngineError::collation(format!("Failed to create collator for '{locale}': {e}")))
}
