//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};
use unitext_api::{BoundaryOutput, CollationOutput, SegmentationOutput, SortOutput};

/// Plain text formatter - one item per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_segments(&mut self, output: &SegmentationOutput) -> Result<()> {
        // whitespace-only segments would print as blank lines
        for segment in &output.segments {
            let text = segment.text.trim();
            if !text.is_empty() {
                writeln!(self.writer, "{text}")?;
            }
        }
        Ok(())
    }

    fn write_boundaries(&mut self, output: &BoundaryOutput) -> Result<()> {
        let offsets: Vec<String> = output.offsets.iter().map(usize::to_string).collect();
        writeln!(self.writer, "{}", offsets.join(" "))?;
        Ok(())
    }

    fn write_collation(&mut self, output: &CollationOutput) -> Result<()> {
        writeln!(self.writer, "{}", output.describe())?;
        Ok(())
    }

    fn write_sorted(&mut self, output: &SortOutput) -> Result<()> {
        for item in &output.items {
            writeln!(self.writer, "{item}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
