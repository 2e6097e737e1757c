//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use unitext_api::{BoundaryOutput, CollationOutput, SegmentationOutput, SortOutput, ToJson};

/// JSON formatter - writes each result as one JSON document
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    fn emit<T: ToJson>(&mut self, value: &T) -> Result<()> {
        let json = value.to_json(self.pretty)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_segments(&mut self, output: &SegmentationOutput) -> Result<()> {
        self.emit(output)
    }

    fn write_boundaries(&mut self, output: &BoundaryOutput) -> Result<()> {
        self.emit(output)
    }

    fn write_collation(&mut self, output: &CollationOutput) -> Result<()> {
        self.emit(output)
    }

    fn write_sorted(&mut self, output: &SortOutput) -> Result<()> {
        self.emit(output)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_collation() {
        let output = CollationOutput {
            left: "a".into(),
            right: "b".into(),
            ordering: "less".into(),
            locale: "en".into(),
            strength: "tertiary".into(),
        };
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer, false);
        formatter.write_collation(&output).unwrap();
        formatter.finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["ordering"], "less");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_pretty_sorted() {
        let output = SortOutput {
            items: vec!["x".into()],
            locale: "en".into(),
        };
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, true)
            .write_sorted(&output)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\n  \"items\""));
    }
}
