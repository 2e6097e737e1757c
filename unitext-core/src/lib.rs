//! Engine-independent building blocks for locale-aware text analysis
//!
//! This crate holds the pieces of the segmentation and collation model that
//! do not depend on any Unicode data:
//! - **Boundary kinds and sets**: the four break granularities and the
//!   ordered offset sets produced by a boundary walk
//! - **Offset translation**: mapping UTF-16 offsets reported by a break
//!   engine onto UTF-8 byte indices of the caller's `str`
//! - **Token filters**: whitespace/punctuation suppression applied after
//!   segmentation
//! - **Collation options**: strength, numeric ordering and case settings,
//!   plus the byte-comparable [`CollationKey`]
//!
//! # Example
//!
//! ```rust
//! use unitext_core::{internal_offset_to_native_index, BoundarySet};
//!
//! let text = "a\u{1F600}b";
//! // The emoji occupies two UTF-16 units and four UTF-8 bytes.
//! assert_eq!(internal_offset_to_native_index(text, 3).unwrap(), 5);
//!
//! let set = BoundarySet::new(text.len(), [0, 1, 5, 6]);
//! assert_eq!(set.segments(text).collect::<Vec<_>>(), ["a", "\u{1F600}", "b"]);
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod boundary;
pub mod collation;
pub mod error;
pub mod filter;
pub mod offsets;

pub use boundary::{BoundaryKind, BoundarySet};
pub use collation::{CaseFirst, CollationKey, CollationOptions, Strength};
pub use error::{CoreError, Result};
pub use filter::{is_non_alphanumeric, is_whitespace_only, TokenFilter};
pub use offsets::{encode_wide, internal_offset_to_native_index, OffsetTranslator};
