//! Sort command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use unitext_api::TextAnalyzer;

use super::collate::CollationFlags;
use super::open_formatter;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{read_input, FileReader};
use crate::output::OutputFormat;

/// Arguments for the sort command
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Locale to use
    pub locale: String,

    /// Strings to sort (lines of --input or stdin when empty)
    pub strings: Vec<String>,

    /// Read one string per line from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub collation: CollationFlags,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl SortArgs {
    /// Execute the sort command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let strings = self.collect_strings()?;
        let options = self.collation.apply(config.collation_options()?);
        let analyzer_config = config
            .analyzer_builder(Some(&self.locale))?
            .collation(options)
            .build()?;
        let analyzer = TextAnalyzer::with_config(analyzer_config)?;
        log::info!("sorting {} strings for {}", strings.len(), analyzer.locale());

        let output = analyzer.sort(strings)?;
        let mut formatter = open_formatter(self.format, config)?;
        formatter.write_sorted(&output)?;
        formatter.finish()
    }

    fn collect_strings(&self) -> Result<Vec<String>> {
        if let Some(path) = &self.input {
            let mut strings = FileReader::read_lines(path)?;
            strings.extend(self.strings.iter().cloned());
            return Ok(strings);
        }
        if !self.strings.is_empty() {
            return Ok(self.strings.clone());
        }
        let text = read_input(None, None).map_err(|_| CliError::MissingInput)?;
        Ok(text
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
