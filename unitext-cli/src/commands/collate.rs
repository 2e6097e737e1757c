//! Collate command implementation

use anyhow::Result;
use clap::Args;
use unitext_api::{CaseFirst, CollationOptions, Strength, TextAnalyzer};

use super::open_formatter;
use crate::config::CliConfig;
use crate::output::OutputFormat;

/// Collation flags shared by `collate` and `sort`
///
/// Unset flags keep the values from the configuration file.
#[derive(Debug, Args, Default)]
pub struct CollationFlags {
    /// primary, secondary, tertiary, quaternary or identical
    #[arg(long, value_name = "STRENGTH")]
    pub strength: Option<Strength>,

    /// Compare digit runs as numbers
    #[arg(long)]
    pub numeric: bool,

    /// upper, lower or off
    #[arg(long, value_name = "CASE")]
    pub case_first: Option<CaseFirst>,

    /// Enable the case level
    #[arg(long)]
    pub case_level: bool,
}

impl CollationFlags {
    /// Overlay the flags on `base`
    pub fn apply(&self, mut base: CollationOptions) -> CollationOptions {
        if let Some(strength) = self.strength {
            base.strength = strength;
        }
        if let Some(case_first) = self.case_first {
            base.case_first = case_first;
        }
        base.numeric |= self.numeric;
        base.case_level |= self.case_level;
        base
    }
}

/// Arguments for the collate command
#[derive(Debug, Args)]
pub struct CollateArgs {
    /// Locale to use
    pub locale: String,

    /// First text
    pub text1: String,

    /// Second text
    pub text2: String,

    #[command(flatten)]
    pub collation: CollationFlags,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl CollateArgs {
    /// Execute the collate command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let options = self.collation.apply(config.collation_options()?);
        let analyzer_config = config
            .analyzer_builder(Some(&self.locale))?
            .collation(options)
            .build()?;
        let analyzer = TextAnalyzer::with_config(analyzer_config)?;
        log::debug!("collating with {:?}", options);

        let output = analyzer.compare(&self.text1, &self.text2)?;
        let mut formatter = open_formatter(self.format, config)?;
        formatter.write_collation(&output)?;
        formatter.finish()
    }
}
