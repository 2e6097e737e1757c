//! Collation engine
//!
//! Locale-sensitive comparison and sorting. A [`Collator`] is a cheap handle
//! around a shared ICU4X collator; clone it freely across threads.

use std::cmp::Ordering;
use std::sync::Arc;

use unitext_core::{CaseFirst, CollationKey, CollationOptions, Strength};

use crate::backend;
use crate::cache::ResourceCache;
use crate::error::{EngineError, Result};
use crate::locale::{Locale, LocaleOrIdentifier};

/// Inputs at least this long compute their sort keys on the rayon pool
#[cfg(feature = "parallel")]
const PARALLEL_KEY_THRESHOLD: usize = 2048;

/// Locale-aware string collator
#[derive(Clone)]
pub struct Collator {
    locale: Locale,
    options: CollationOptions,
    engine: Arc<icu_collator::Collator>,
}

impl Collator {
    /// Build a collator with its own engine
    pub fn new(locale: impl Into<LocaleOrIdentifier>, options: CollationOptions) -> Result<Self> {
        let locale = locale.into().resolve()?;
        let engine = Arc::new(backend::build_collator(&locale, options)?);
        Ok(Self {
            locale,
            options,
            engine,
        })
    }

    /// Build a collator whose engine is drawn from `cache`
    pub fn cached(
        locale: impl Into<LocaleOrIdentifier>,
        options: CollationOptions,
        cache: &ResourceCache,
    ) -> Result<Self> {
        let locale = locale.into().resolve()?;
        let engine = cache.collator_engine(&locale, options)?;
        Ok(Self {
            locale,
            options,
            engine,
        })
    }

    /// Locale this collator was built for
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Full configuration
    pub fn options(&self) -> CollationOptions {
        self.options
    }

    /// Comparison strength
    pub fn strength(&self) -> Strength {
        self.options.strength
    }

    /// Whether digit runs compare numerically
    pub fn numeric(&self) -> bool {
        self.options.numeric
    }

    /// Case ordering
    pub fn case_first(&self) -> CaseFirst {
        self.options.case_first
    }

    /// Whether the case level is enabled
    pub fn case_level(&self) -> bool {
        self.options.case_level
    }

    /// Compare two strings under this collator's rules
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.engine.as_borrowed().compare(a, b)
    }

    /// `compare(a, b) == Equal`
    pub fn is_equal(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// `compare(a, b) == Less`
    pub fn is_less(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// `compare(a, b) == Greater`
    pub fn is_greater(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Byte-comparable sort key for `s`
    ///
    /// Keys from collators with the same locale and options order exactly
    /// like [`compare`](Self::compare).
    pub fn key(&self, s: &str) -> Result<CollationKey> {
        let mut bytes = Vec::new();
        self.engine
            .as_borrowed()
            .write_sort_key_to(s, &mut bytes)
            .map_err(|e| EngineError::collation(format!("failed to write sort key: {e:?}")))?;
        Ok(CollationKey::from_bytes(bytes))
    }

    /// Comparator closure for `sort_by` and friends
    pub fn comparator(&self) -> impl Fn(&str, &str) -> Ordering + '_ {
        move |a, b| self.compare(a, b)
    }

    /// Stable sort of `strings` by sort key
    pub fn sort<I, S>(&self, strings: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut strings: Vec<String> = strings.into_iter().map(Into::into).collect();
        self.sort_by_key(&mut strings, |s| s.as_str())?;
        Ok(strings)
    }

    /// Stable in-place sort of arbitrary items by a string field
    ///
    /// Keys are computed once per item.
    pub fn sort_by_key<T, F>(&self, items: &mut [T], field: F) -> Result<()>
    where
        T: Sync,
        F: Fn(&T) -> &str + Sync,
    {
        let keys = self.keys_of(items, &field)?;
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        apply_permutation(items, &mut order);
        Ok(())
    }

    fn keys_of<T, F>(&self, items: &[T], field: &F) -> Result<Vec<CollationKey>>
    where
        T: Sync,
        F: Fn(&T) -> &str + Sync,
    {
        #[cfg(feature = "parallel")]
        if items.len() >= PARALLEL_KEY_THRESHOLD {
            use rayon::prelude::*;
            tracing::trace!(items = items.len(), "computing sort keys in parallel");
            return items.par_iter().map(|item| self.key(field(item))).collect();
        }
        items.iter().map(|item| self.key(field(item))).collect()
    }
}

/// Reorder `items` so that position `i` holds the element previously at `order[i]`
fn apply_permutation<T>(items: &mut [T], order: &mut [usize]) {
    for start in 0..order.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            items.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

impl std::fmt::Debug for Collator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Collator(locale='{}', strength='{}', numeric={})",
            self.locale.language_tag(),
            self.options.strength,
            self.options.numeric
        )
    }
}

/// One-off comparison with a throwaway collator
///
/// Builds a new engine on every call; use a [`Collator`] or a cached one in
/// loops.
pub fn compare(
    a: &str,
    b: &str,
    locale: impl Into<LocaleOrIdentifier>,
    options: CollationOptions,
) -> Result<Ordering> {
    Ok(Collator::new(locale, options)?.compare(a, b))
}

/// One-off sort with a throwaway collator
pub fn sort<I, S>(
    strings: I,
    locale: impl Into<LocaleOrIdentifier>,
    options: CollationOptions,
) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Collator::new(locale, options)?.sort(strings)
}
