//! Collation options and sort keys

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::CoreError;

/// Comparison strength, in increasing order of discrimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Strength {
    /// Base letters only: ignores case and accents
    Primary,
    /// Adds accent sensitivity
    Secondary,
    /// Adds case sensitivity
    #[default]
    Tertiary,
    /// Adds punctuation and variant sensitivity
    Quaternary,
    /// Exact code point equality breaks remaining ties
    Identical,
}

impl Strength {
    /// All strengths, weakest first
    pub const ALL: [Strength; 5] = [
        Strength::Primary,
        Strength::Secondary,
        Strength::Tertiary,
        Strength::Quaternary,
        Strength::Identical,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Strength::Primary => "primary",
            Strength::Secondary => "secondary",
            Strength::Tertiary => "tertiary",
            Strength::Quaternary => "quaternary",
            Strength::Identical => "identical",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strength {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .into_iter()
            .find(|strength| strength.name() == s)
            .ok_or_else(|| CoreError::UnknownStrength(s.into()))
    }
}

/// Which case sorts first when strings differ only by case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseFirst {
    /// Locale default
    #[default]
    Off,
    /// Uppercase before lowercase
    Upper,
    /// Lowercase before uppercase
    Lower,
}

impl CaseFirst {
    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            CaseFirst::Off => "off",
            CaseFirst::Upper => "upper",
            CaseFirst::Lower => "lower",
        }
    }
}

impl fmt::Display for CaseFirst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseFirst {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upper" => Ok(CaseFirst::Upper),
            "lower" => Ok(CaseFirst::Lower),
            "off" | "none" | "false" | "" => Ok(CaseFirst::Off),
            _ => Err(CoreError::UnknownCaseFirst(s.into())),
        }
    }
}

/// Full collator configuration
///
/// Two collators with equal options and locale produce interchangeable
/// results; this is also the cache key for collator instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollationOptions {
    /// Comparison strength
    pub strength: Strength,
    /// Compare digit runs by numeric value
    pub numeric: bool,
    /// Case ordering
    pub case_first: CaseFirst,
    /// Separate case level between secondary and tertiary
    pub case_level: bool,
}

impl CollationOptions {
    /// Options with the given strength, everything else default
    pub fn with_strength(strength: Strength) -> Self {
        Self {
            strength,
            ..Self::default()
        }
    }

    /// Set the strength
    pub fn strength(mut self, strength: Strength) -> Self {
        self.strength = strength;
        self
    }

    /// Enable or disable numeric ordering
    pub fn numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    /// Set the case-first ordering
    pub fn case_first(mut self, case_first: CaseFirst) -> Self {
        self.case_first = case_first;
        self
    }

    /// Enable or disable the case level
    pub fn case_level(mut self, case_level: bool) -> Self {
        self.case_level = case_level;
        self
    }
}

/// Byte-comparable sort key
///
/// Ordering two keys byte-wise reproduces the comparison of the strings they
/// were built from, provided both came from collators with the same locale
/// and [`CollationOptions`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CollationKey(Vec<u8>);

impl CollationKey {
    /// Wrap raw key bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into key bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key has no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CollationKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
