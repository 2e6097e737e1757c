//! Locale registry
//!
//! Resolves user supplied identifiers into validated [`Locale`] handles. Every
//! engine entry point accepts `impl Into<LocaleOrIdentifier>` and calls
//! [`LocaleOrIdentifier::resolve`] once, so strings, parsed locales and the
//! process default are all handled the same way.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::collate::Collator;
use crate::error::{EngineError, Result};
use crate::segment::{GraphemeSegmenter, LineSegmenter, SentenceSegmenter, WordSegmenter};
use unitext_core::CollationOptions;

/// Locale used when the environment names none or names one that cannot be parsed
pub const FALLBACK_LOCALE: &str = "en-US";

/// Environment variables consulted for the default locale, highest priority first
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Locales shipped with the compiled collation and segmentation data
const SHIPPED_LOCALES: &[&str] = &[
    "af", "am", "ar", "as", "az", "be", "bg", "bn", "bo", "bs", "ca", "chr", "cs", "cy", "da",
    "de", "de-AT", "dsb", "dz", "ee", "el", "en", "en-GB", "en-US", "eo", "es", "es-419", "et",
    "fa", "fa-AF", "ff-Adlm", "fi", "fil", "fo", "fr", "fr-CA", "ga", "gl", "gu", "ha", "haw",
    "he", "hi", "hr", "hsb", "hu", "hy", "id", "ig", "is", "it", "ja", "ka", "kk", "kl", "km",
    "kn", "ko", "kok", "ku", "ky", "lb", "lkt", "ln", "lo", "lt", "lv", "mk", "ml", "mn", "mr",
    "ms", "mt", "my", "nb", "ne", "nl", "nn", "no", "om", "or", "pa", "pa-Guru", "pl", "ps",
    "pt", "pt-PT", "ro", "ru", "se", "si", "sk", "sl", "smn", "sq", "sr", "sr-Latn", "sv", "sw",
    "ta", "te", "th", "tk", "to", "tr", "ug", "uk", "ur", "uz", "vi", "wo", "xh", "yi", "yo",
    "zh", "zh-Hant", "zh-Hans-SG", "zh-Hant-HK", "zh-Hant-TW", "zu",
];

/// Immutable, validated locale handle
///
/// Equality and hashing follow the canonical base name (`en_US`,
/// `zh_Hant_TW`), so two locales differing only in Unicode extension keywords
/// compare equal. The full tag, extensions included, is still handed to the
/// engines when building services.
#[derive(Clone)]
pub struct Locale {
    inner: icu_locale_core::Locale,
    base_name: String,
}

impl Locale {
    /// Parse an identifier such as `en-US`, `en_US` or `de-u-co-phonebk`.
    ///
    /// An empty identifier yields the root locale.
    pub fn new(identifier: &str) -> Result<Self> {
        resolve(identifier)
    }

    /// The root locale (`und`)
    pub fn root() -> Self {
        Self::from_icu(icu_locale_core::locale!("und"))
    }

    fn from_icu(inner: icu_locale_core::Locale) -> Self {
        let id = &inner.id;
        let mut parts: Vec<&str> = vec![id.language.as_str()];
        if let Some(script) = id.script.as_ref() {
            parts.push(script.as_str());
        }
        if let Some(region) = id.region.as_ref() {
            parts.push(region.as_str());
        }
        parts.extend(id.variants.iter().map(|v| v.as_str()));
        let base_name = parts.join("_");
        Self { inner, base_name }
    }

    /// ISO 639 language code, `und` for the root locale
    pub fn language(&self) -> &str {
        self.inner.id.language.as_str()
    }

    /// ISO 15924 script code, if present
    pub fn script(&self) -> Option<&str> {
        self.inner.id.script.as_ref().map(|s| s.as_str())
    }

    /// ISO 3166 region code, if present
    pub fn region(&self) -> Option<&str> {
        self.inner.id.region.as_ref().map(|r| r.as_str())
    }

    /// Variant subtags joined by `_`, if any
    pub fn variant(&self) -> Option<String> {
        let variants: Vec<&str> = self.inner.id.variants.iter().map(|v| v.as_str()).collect();
        if variants.is_empty() {
            None
        } else {
            Some(variants.join("_"))
        }
    }

    /// Canonical underscore-joined identifier, e.g. `zh_Hant_TW`
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// BCP-47 form of the base name, e.g. `zh-Hant-TW`
    pub fn language_tag(&self) -> String {
        self.base_name.replace('_', "-")
    }

    /// True for `und` with no other subtags
    pub fn is_root(&self) -> bool {
        self.base_name == "und"
    }

    /// Full tag including Unicode extensions; distinguishes cache entries
    pub(crate) fn full_tag(&self) -> String {
        self.inner.to_string()
    }

    pub(crate) fn as_icu(&self) -> &icu_locale_core::Locale {
        &self.inner
    }

    pub(crate) fn content_locale(&self) -> Option<&icu_locale_core::LanguageIdentifier> {
        if self.is_root() {
            None
        } else {
            Some(&self.inner.id)
        }
    }

    /// Build an uncached collator for this locale
    pub fn get_collator(&self, options: CollationOptions) -> Result<Collator> {
        Collator::new(self, options)
    }

    /// Build a grapheme segmenter for this locale
    pub fn get_grapheme_segmenter(&self) -> GraphemeSegmenter {
        GraphemeSegmenter::new(self)
    }

    /// Build a word segmenter for this locale that keeps every token
    pub fn get_word_segmenter(&self) -> WordSegmenter {
        WordSegmenter::new(self)
    }

    /// Build a sentence segmenter for this locale
    pub fn get_sentence_segmenter(&self) -> SentenceSegmenter {
        SentenceSegmenter::new(self)
    }

    /// Build a line segmenter for this locale
    pub fn get_line_segmenter(&self) -> LineSegmenter {
        LineSegmenter::new(self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_name)
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locale('{}')", self.language_tag())
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.base_name == other.base_name
    }
}

impl Eq for Locale {}

impl Hash for Locale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base_name.hash(state);
    }
}

impl FromStr for Locale {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        resolve(s)
    }
}

/// A locale as callers may supply it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocaleOrIdentifier {
    /// Unparsed identifier, hyphen or underscore separated
    Identifier(String),
    /// Already resolved locale
    Locale(Locale),
    /// Ambient process default
    #[default]
    Default,
}

impl LocaleOrIdentifier {
    /// Turn the input into a validated locale
    pub fn resolve(self) -> Result<Locale> {
        match self {
            LocaleOrIdentifier::Identifier(id) => resolve(&id),
            LocaleOrIdentifier::Locale(locale) => Ok(locale),
            LocaleOrIdentifier::Default => Ok(default_locale()),
        }
    }
}

impl From<&str> for LocaleOrIdentifier {
    fn from(id: &str) -> Self {
        LocaleOrIdentifier::Identifier(id.to_string())
    }
}

impl From<String> for LocaleOrIdentifier {
    fn from(id: String) -> Self {
        LocaleOrIdentifier::Identifier(id)
    }
}

impl From<&String> for LocaleOrIdentifier {
    fn from(id: &String) -> Self {
        LocaleOrIdentifier::Identifier(id.clone())
    }
}

impl From<Locale> for LocaleOrIdentifier {
    fn from(locale: Locale) -> Self {
        LocaleOrIdentifier::Locale(locale)
    }
}

impl From<&Locale> for LocaleOrIdentifier {
    fn from(locale: &Locale) -> Self {
        LocaleOrIdentifier::Locale(locale.clone())
    }
}

impl<T: Into<LocaleOrIdentifier>> From<Option<T>> for LocaleOrIdentifier {
    fn from(value: Option<T>) -> Self {
        value.map_or(LocaleOrIdentifier::Default, Into::into)
    }
}

/// Resolve an identifier to a locale.
///
/// Accepts `-` or `_` separators. Empty or blank input resolves to the root
/// locale; anything the parser rejects is a configuration error.
pub fn resolve(identifier: &str) -> Result<Locale> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Ok(Locale::root());
    }

    let normalized = trimmed.replace('_', "-");
    icu_locale_core::Locale::try_from_str(&normalized)
        .map(Locale::from_icu)
        .map_err(|e| {
            EngineError::configuration(format!(
                "Failed to create locale for '{identifier}': {e}"
            ))
        })
}

/// Strip POSIX decorations (`.UTF-8`, `@euro`) from a locale environment value.
///
/// Returns `None` for empty values and for the `C` and `POSIX` locales, which
/// carry no language information.
pub fn parse_posix_locale(value: &str) -> Option<String> {
    let base = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    match base {
        "" | "C" | "POSIX" => None,
        other => Some(other.to_string()),
    }
}

/// Process default locale.
///
/// Reads `LC_ALL`, `LC_MESSAGES` then `LANG`; falls back to `en-US`. Never
/// fails.
pub fn default_locale() -> Locale {
    default_locale_from(|name| std::env::var(name).ok())
}

/// Default locale using a custom environment lookup
pub fn default_locale_from<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    let candidate = LOCALE_ENV_VARS
        .iter()
        .copied()
        .find_map(|name| lookup(name).as_deref().and_then(parse_posix_locale));

    if let Some(id) = candidate {
        match resolve(&id) {
            Ok(locale) => return locale,
            Err(e) => {
                tracing::warn!(identifier = %id, error = %e, "unusable default locale, falling back to en-US");
            }
        }
    }

    fallback_locale()
}

fn fallback_locale() -> Locale {
    Locale::from_icu(icu_locale_core::locale!("en-US"))
}

/// Locales with shipped data, sorted by BCP-47 tag and de-duplicated
///
/// Read from a fixed table rather than the data provider. The table tracks
/// the `icu_collator` and `icu_segmenter` compiled data and must be refreshed
/// whenever those crates move to a new data version.
pub fn available_locales() -> Vec<Locale> {
    let mut locales: Vec<Locale> = SHIPPED_LOCALES
        .iter()
        .filter_map(|id| resolve(id).ok())
        .collect();
    locales.sort_by_key(|l| l.language_tag());
    locales.dedup();
    locales
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_components() {
        let locale = resolve("zh-Hant-TW").unwrap();
        assert_eq!(locale.language(), "zh");
        assert_eq!(locale.script(), Some("Hant"));
        assert_eq!(locale.region(), Some("TW"));
        assert_eq!(locale.variant(), None);
        assert_eq!(locale.base_name(), "zh_Hant_TW");
        assert_eq!(locale.language_tag(), "zh-Hant-TW");
        assert_eq!(locale.to_string(), "zh_Hant_TW");
    }

    #[test]
    fn test_underscore_and_hyphen_are_equal() {
        let a = resolve("en_US").unwrap();
        let b = resolve("en-US").unwrap();
        assert_eq!(a, b);

        let set: HashSet<Locale> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_variant() {
        let locale = resolve("ca-ES-valencia").unwrap();
        assert_eq!(locale.variant().as_deref(), Some("valencia"));
        assert_eq!(locale.base_name(), "ca_ES_valencia");
    }

    #[test]
    fn test_empty_identifier_is_root() {
        for id in ["", "   "] {
            let locale = resolve(id).unwrap();
            assert!(locale.is_root());
            assert_eq!(locale.base_name(), "und");
            assert_eq!(locale.language(), "und");
        }
    }

    #[test]
    fn test_invalid_identifier_is_configuration_error() {
        let err = resolve("not a locale!").unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
        assert!(err.to_string().contains("not a locale!"));
    }

    #[test]
    fn test_posix_parsing() {
        assert_eq!(parse_posix_locale("de_DE.UTF-8").as_deref(), Some("de_DE"));
        assert_eq!(parse_posix_locale("fr_FR@euro").as_deref(), Some("fr_FR"));
        assert_eq!(parse_posix_locale("C.UTF-8"), None);
        assert_eq!(parse_posix_locale("POSIX"), None);
        assert_eq!(parse_posix_locale(""), None);
    }

    #[test]
    fn test_default_locale_priority() {
        let env = |name: &str| match name {
            "LC_MESSAGES" => Some("ja_JP.UTF-8".to_string()),
            "LANG" => Some("fr_FR.UTF-8".to_string()),
            _ => None,
        };
        assert_eq!(default_locale_from(env).base_name(), "ja_JP");
    }

    #[test]
    fn test_default_locale_fallback() {
        assert_eq!(default_locale_from(|_| None).language_tag(), "en-US");
        assert_eq!(
            default_locale_from(|_| Some("C".to_string())).language_tag(),
            "en-US"
        );
        assert_eq!(
            default_locale_from(|_| Some("!!garbage!!".to_string())).language_tag(),
            "en-US"
        );
    }

    #[test]
    fn test_available_locales_sorted_and_unique() {
        let locales = available_locales();
        assert!(locales.len() > 50);
        let tags: Vec<String> = locales.iter().map(Locale::language_tag).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tags, sorted);
        assert!(tags.iter().any(|t| t == "en-US"));
    }

    #[test]
    fn test_shipped_table_matches_compiled_data() {
        // a stale entry would otherwise vanish silently from available_locales
        assert_eq!(available_locales().len(), SHIPPED_LOCALES.len());
        for locale in available_locales() {
            assert!(
                locale.get_collator(CollationOptions::default()).is_ok(),
                "no collation data for {}",
                locale.language_tag()
            );
        }
    }

    #[test]
    fn test_locale_or_identifier_conversions() {
        let en = resolve("en").unwrap();
        assert_eq!(LocaleOrIdentifier::from("en").resolve().unwrap(), en);
        assert_eq!(LocaleOrIdentifier::from(&en).resolve().unwrap(), en);
        assert_eq!(
            LocaleOrIdentifier::from(None::<&str>),
            LocaleOrIdentifier::Default
        );
        assert!(LocaleOrIdentifier::from("??").resolve().is_err());
    }
}
