//! Output formatting module

use anyhow::Result;
use std::io::Write;
use std::str::FromStr;
use unitext_api::{BoundaryOutput, CollationOutput, SegmentationOutput, SortOutput};

use crate::error::CliError;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write a segmentation result
    fn write_segments(&mut self, output: &SegmentationOutput) -> Result<()>;

    /// Write boundary offsets
    fn write_boundaries(&mut self, output: &BoundaryOutput) -> Result<()>;

    /// Write a comparison result
    fn write_collation(&mut self, output: &CollationOutput) -> Result<()>;

    /// Write sorted strings
    fn write_sorted(&mut self, output: &SortOutput) -> Result<()>;

    /// Flush buffered output
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line
    Text,
    /// JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::ConfigError(format!(
                "unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

/// Build the formatter for `format`
pub fn create_formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    pretty_json: bool,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("markdown".parse::<OutputFormat>().is_err());
    }
}
