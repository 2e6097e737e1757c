//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::cmp::Ordering;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// One segment with its position in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentDTO {
    /// Segment text
    pub text: String,
    /// Byte offset of the first byte
    pub start: usize,
    /// Byte offset one past the last byte
    pub end: usize,
    /// Character offset of the first character
    pub char_start: usize,
}

/// Type alias for brevity
pub type Segment = SegmentDTO;

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Boundary granularity
    pub kind: String,
    /// Locale tag the engine was built for
    pub locale: String,
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Segmentation result
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentationOutput {
    /// Segments in text order
    pub segments: Vec<SegmentDTO>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl SegmentationOutput {
    /// Segment texts only
    pub fn texts(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Boundary offsets result
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryOutput {
    /// UTF-8 byte offsets, always including 0 and the text length
    pub offsets: Vec<usize>,
    /// Processing metadata
    pub metadata: Metadata,
}

/// Comparison result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollationOutput {
    /// Left operand
    pub left: String,
    /// Right operand
    pub right: String,
    /// `"less"`, `"equal"` or `"greater"`
    pub ordering: String,
    /// Locale tag
    pub locale: String,
    /// Strength name
    pub strength: String,
}

impl CollationOutput {
    /// Parse the ordering back into [`Ordering`]
    pub fn as_ordering(&self) -> Option<Ordering> {
        match self.ordering.as_str() {
            "less" => Some(Ordering::Less),
            "equal" => Some(Ordering::Equal),
            "greater" => Some(Ordering::Greater),
            _ => None,
        }
    }

    /// Human readable form: `Equal`, `'a' < 'b'` or `'a' > 'b'`
    pub fn describe(&self) -> String {
        match self.as_ordering() {
            Some(Ordering::Less) => format!("'{}' < '{}'", self.left, self.right),
            Some(Ordering::Greater) => format!("'{}' > '{}'", self.left, self.right),
            _ => "Equal".to_string(),
        }
    }
}

/// Lowercase name used in serialized output
pub fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

/// Sorted strings result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortOutput {
    /// Strings in collation order
    pub items: Vec<String>,
    /// Locale tag
    pub locale: String,
}

/// JSON rendering for the output types
#[cfg(feature = "serde")]
pub trait ToJson: serde::Serialize {
    /// Serialize to a JSON document, indented when `pretty`
    fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(feature = "serde")]
impl ToJson for SegmentationOutput {}
#[cfg(feature = "serde")]
impl ToJson for BoundaryOutput {}
#[cfg(feature = "serde")]
impl ToJson for CollationOutput {}
#[cfg(feature = "serde")]
impl ToJson for SortOutput {}
