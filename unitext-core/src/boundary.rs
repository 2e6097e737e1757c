//! Boundary kinds and boundary sets

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::CoreError;

/// Granularity of a boundary walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoundaryKind {
    /// User-perceived characters (extended grapheme clusters)
    Grapheme,
    /// Words, including the whitespace and punctuation runs between them
    Word,
    /// Sentences, each keeping its terminal punctuation and trailing space
    Sentence,
    /// Line-break opportunities
    Line,
}

impl BoundaryKind {
    /// All kinds, in increasing granularity except for `Line`
    pub const ALL: [BoundaryKind; 4] = [
        BoundaryKind::Grapheme,
        BoundaryKind::Word,
        BoundaryKind::Sentence,
        BoundaryKind::Line,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryKind::Grapheme => "grapheme",
            BoundaryKind::Word => "word",
            BoundaryKind::Sentence => "sentence",
            BoundaryKind::Line => "line",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grapheme" | "character" | "char" => Ok(BoundaryKind::Grapheme),
            "word" => Ok(BoundaryKind::Word),
            "sentence" => Ok(BoundaryKind::Sentence),
            "line" => Ok(BoundaryKind::Line),
            _ => Err(CoreError::UnknownBoundaryKind(s.into())),
        }
    }
}

/// Ordered, deduplicated set of native (UTF-8 byte) boundary offsets
///
/// A set built for a text of length `len` always contains `0` and `len`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoundarySet {
    offsets: Vec<usize>,
}

impl BoundarySet {
    /// Build a set from arbitrary offsets, adding the `0` and `len` sentinels.
    ///
    /// Offsets greater than `len` are dropped.
    pub fn new(len: usize, offsets: impl IntoIterator<Item = usize>) -> Self {
        let mut offsets: Vec<usize> = offsets.into_iter().filter(|&o| o <= len).collect();
        offsets.push(0);
        offsets.push(len);
        offsets.sort_unstable();
        offsets.dedup();
        Self { offsets }
    }

    /// Whether `offset` is a boundary
    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    /// Number of boundaries, sentinels included
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True only for the default (unbuilt) set
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate boundaries in increasing order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.iter().copied()
    }

    /// Boundaries strictly inside the text (sentinels excluded)
    pub fn interior(&self) -> &[usize] {
        match self.offsets.len() {
            0..=2 => &[],
            n => &self.offsets[1..n - 1],
        }
    }

    /// Borrow the offsets as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Consume the set into its offsets
    pub fn into_vec(self) -> Vec<usize> {
        self.offsets
    }

    /// Slice `text` between adjacent boundaries.
    ///
    /// `text` must be the text the set was built for.
    pub fn segments<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.offsets.windows(2).map(move |w| &text[w[0]..w[1]])
    }
}

impl<'a> IntoIterator for &'a BoundarySet {
    type Item = usize;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter().copied()
    }
}
