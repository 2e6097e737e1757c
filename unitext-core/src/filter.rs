//! Post-segmentation token filters
//!
//! Filters run over the raw segments a break engine produced. They never
//! influence boundary positions.

/// True if `segment` is non-empty and made only of whitespace
pub fn is_whitespace_only(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(char::is_whitespace)
}

/// True if no character of `segment` is alphanumeric
pub fn is_non_alphanumeric(segment: &str) -> bool {
    segment.chars().all(|c| !c.is_alphanumeric())
}

/// Which word-level tokens to suppress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenFilter {
    /// Drop whitespace-only tokens
    pub skip_whitespace: bool,
    /// Drop tokens with no alphanumeric character
    pub skip_punctuation: bool,
}

impl TokenFilter {
    /// Keep every token
    pub const NONE: TokenFilter = TokenFilter {
        skip_whitespace: false,
        skip_punctuation: false,
    };

    /// Keep only tokens containing a letter or digit
    pub const WORDS_ONLY: TokenFilter = TokenFilter {
        skip_whitespace: true,
        skip_punctuation: true,
    };

    /// Whether `segment` survives the filter
    pub fn accepts(&self, segment: &str) -> bool {
        if self.skip_whitespace && is_whitespace_only(segment) {
            return false;
        }
        if self.skip_punctuation && is_non_alphanumeric(segment) {
            return false;
        }
        true
    }

    /// True when the filter drops nothing
    pub fn is_passthrough(&self) -> bool {
        !self.skip_whitespace && !self.skip_punctuation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only() {
        assert!(is_whitespace_only(" "));
        assert!(is_whitespace_only("\t\n\u{3000}"));
        assert!(!is_whitespace_only(""));
        assert!(!is_whitespace_only(" a "));
    }

    #[test]
    fn test_non_alphanumeric() {
        assert!(is_non_alphanumeric(","));
        assert!(is_non_alphanumeric("!?"));
        assert!(is_non_alphanumeric(" "));
        assert!(!is_non_alphanumeric("don't"));
        assert!(!is_non_alphanumeric("42"));
        assert!(!is_non_alphanumeric("世界"));
    }

    #[test]
    fn test_filter_combinations() {
        assert!(TokenFilter::NONE.accepts(" "));
        assert!(TokenFilter::NONE.is_passthrough());

        let ws = TokenFilter {
            skip_whitespace: true,
            skip_punctuation: false,
        };
        assert!(!ws.accepts(" "));
        assert!(ws.accepts(","));

        assert!(!TokenFilter::WORDS_ONLY.accepts(","));
        assert!(!TokenFilter::WORDS_ONLY.accepts(" "));
        assert!(TokenFilter::WORDS_ONLY.accepts("Hello"));
    }
}
