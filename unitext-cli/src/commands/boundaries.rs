//! Boundaries command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use unitext_api::{BoundaryKind, Input, TextAnalyzer};

use super::open_formatter;
use crate::config::CliConfig;
use crate::input::read_input;
use crate::output::OutputFormat;

/// Arguments for the boundaries command
#[derive(Debug, Args)]
pub struct BoundariesArgs {
    /// Boundary kind: grapheme, word, sentence or line
    pub kind: BoundaryKind,

    /// Text to analyze (stdin when neither TEXT nor --input is given)
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Locale identifier
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl BoundariesArgs {
    /// Execute the boundaries command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let text = read_input(self.text.as_deref(), self.input.as_deref())?;
        let analyzer =
            TextAnalyzer::with_config(config.analyzer_builder(self.locale.as_deref())?.build()?)?;
        let output = analyzer.boundaries(self.kind, Input::from_text(text))?;

        let mut formatter = open_formatter(self.format, config)?;
        formatter.write_boundaries(&output)?;
        formatter.finish()
    }
}
