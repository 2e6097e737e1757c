//! Segment command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use unitext_api::{BoundaryKind, Input, TextAnalyzer};

use super::open_formatter;
use crate::config::CliConfig;
use crate::input::read_input;
use crate::output::OutputFormat;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Boundary kind: grapheme, word, sentence or line
    pub kind: BoundaryKind,

    /// Text to segment (stdin when neither TEXT nor --input is given)
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Locale identifier, e.g. en-US or zh_Hant_TW
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Drop whitespace-only word tokens
    #[arg(long)]
    pub skip_whitespace: bool,

    /// Drop word tokens without letters or digits
    #[arg(long)]
    pub skip_punctuation: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let text = read_input(self.text.as_deref(), self.input.as_deref())?;
        let analyzer_config = config
            .analyzer_builder(self.locale.as_deref())?
            .skip_whitespace(self.skip_whitespace)
            .skip_punctuation(self.skip_punctuation)
            .build()?;
        let analyzer = TextAnalyzer::with_config(analyzer_config)?;
        log::info!(
            "segmenting {} bytes into {} segments for {}",
            text.len(),
            self.kind,
            analyzer.locale()
        );

        let output = analyzer.segment(self.kind, Input::from_text(text))?;
        log::debug!("{} segments", output.segments.len());

        let mut formatter = open_formatter(self.format, config)?;
        formatter.write_segments(&output)?;
        formatter.finish()
    }
}
