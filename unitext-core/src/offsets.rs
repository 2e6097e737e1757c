//! Translation between engine offsets and caller-visible indices
//!
//! Break engines walk a UTF-16 buffer and report positions as UTF-16
//! code-unit offsets. Callers index a Rust `str` by UTF-8 byte. The native
//! index of an internal offset `p` is the UTF-8 length of the prefix of the
//! text that spans the first `p` UTF-16 units.

use alloc::vec::Vec;
use core::str::CharIndices;

use crate::error::{CoreError, Result};

/// Encode `text` as UTF-16 into `buf`, replacing its previous contents.
///
/// The buffer is reused so that rebinding an iterator to new text does not
/// allocate once capacity has grown.
pub fn encode_wide(text: &str, buf: &mut Vec<u16>) {
    buf.clear();
    buf.extend(text.encode_utf16());
}

/// Convert a UTF-16 offset into the UTF-8 byte index of the same position.
///
/// Fails if `offset` is past the end of the text or lands inside a surrogate
/// pair. This is the reference definition; [`OffsetTranslator`] computes the
/// same mapping incrementally.
///
/// ```rust
/// use unitext_core::internal_offset_to_native_index;
///
/// assert_eq!(internal_offset_to_native_index("héllo", 2).unwrap(), 3);
/// assert!(internal_offset_to_native_index("héllo", 6).is_err());
/// ```
pub fn internal_offset_to_native_index(text: &str, offset: usize) -> Result<usize> {
    let mut units = 0usize;
    for (idx, ch) in text.char_indices() {
        if units == offset {
            return Ok(idx);
        }
        units += ch.len_utf16();
        if units > offset {
            return Err(CoreError::SplitSurrogate { offset });
        }
    }

    if units == offset {
        Ok(text.len())
    } else {
        Err(CoreError::OffsetOutOfRange { offset, len: units })
    }
}

/// Forward-only incremental offset translator
///
/// Boundary walks report offsets in increasing order, so each translation
/// only has to scan the characters between the previous boundary and the
/// new one. The whole walk is linear in the text length.
#[derive(Debug, Clone)]
pub struct OffsetTranslator<'t> {
    chars: CharIndices<'t>,
    wide: usize,
    native: usize,
}

impl<'t> OffsetTranslator<'t> {
    /// Start translating offsets for `text` from position zero
    pub fn new(text: &'t str) -> Self {
        Self {
            chars: text.char_indices(),
            wide: 0,
            native: 0,
        }
    }

    /// Translate `offset`, which must not precede the last translated offset
    pub fn translate(&mut self, offset: usize) -> Result<usize> {
        if offset < self.wide {
            return Err(CoreError::NonMonotonicOffset {
                offset,
                previous: self.wide,
            });
        }

        while self.wide < offset {
            let Some((idx, ch)) = self.chars.next() else {
                return Err(CoreError::OffsetOutOfRange {
                    offset,
                    len: self.wide,
                });
            };
            self.wide += ch.len_utf16();
            self.native = idx + ch.len_utf8();
        }

        if self.wide != offset {
            return Err(CoreError::SplitSurrogate { offset });
        }
        Ok(self.native)
    }

    /// Last internal offset reached
    pub fn internal_position(&self) -> usize {
        self.wide
    }

    /// Native index of the last internal offset reached
    pub fn native_position(&self) -> usize {
        self.native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_identity() {
        let text = "Hello world";
        for offset in 0..=text.len() {
            assert_eq!(internal_offset_to_native_index(text, offset), Ok(offset));
        }
    }

    #[test]
    fn test_bmp_multibyte() {
        // 'é' is one UTF-16 unit and two UTF-8 bytes, '世' is one unit and three bytes
        let text = "é世x";
        assert_eq!(internal_offset_to_native_index(text, 0), Ok(0));
        assert_eq!(internal_offset_to_native_index(text, 1), Ok(2));
        assert_eq!(internal_offset_to_native_index(text, 2), Ok(5));
        assert_eq!(internal_offset_to_native_index(text, 3), Ok(6));
    }

    #[test]
    fn test_astral_surrogate_pair() {
        let text = "\u{1F1E8}\u{1F1E6}"; // regional indicators C, A
        assert_eq!(internal_offset_to_native_index(text, 2), Ok(4));
        assert_eq!(internal_offset_to_native_index(text, 4), Ok(8));
        assert_eq!(
            internal_offset_to_native_index(text, 1),
            Err(CoreError::SplitSurrogate { offset: 1 })
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            internal_offset_to_native_index("ab", 3),
            Err(CoreError::OffsetOutOfRange { offset: 3, len: 2 })
        );
        assert_eq!(internal_offset_to_native_index("", 0), Ok(0));
    }

    #[test]
    fn test_translator_matches_reference() {
        let text = "a\u{301}b 👨‍👩‍👧 ok";
        let mut translator = OffsetTranslator::new(text);
        let total: usize = text.chars().map(char::len_utf16).sum();

        let mut wide = 0;
        for ch in text.chars() {
            assert_eq!(
                translator.translate(wide),
                internal_offset_to_native_index(text, wide)
            );
            wide += ch.len_utf16();
        }
        assert_eq!(translator.translate(total), Ok(text.len()));
    }

    #[test]
    fn test_translator_repeats_and_rejects_backwards() {
        let text = "héllo";
        let mut translator = OffsetTranslator::new(text);
        assert_eq!(translator.translate(2), Ok(3));
        assert_eq!(translator.translate(2), Ok(3));
        assert_eq!(
            translator.translate(1),
            Err(CoreError::NonMonotonicOffset {
                offset: 1,
                previous: 2
            })
        );
    }

    #[test]
    fn test_encode_wide_reuses_buffer() {
        let mut buf = Vec::new();
        encode_wide("a\u{1F600}", &mut buf);
        assert_eq!(buf.len(), 3);
        encode_wide("b", &mut buf);
        assert_eq!(buf, [u16::from(b'b')]);
    }
}
