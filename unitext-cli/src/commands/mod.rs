//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io;

use crate::config::CliConfig;
use crate::output::{create_formatter, OutputFormat, OutputFormatter};

pub mod boundaries;
pub mod collate;
pub mod generate_config;
pub mod list;
pub mod segment;
pub mod sort;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into graphemes, words, sentences or lines
    Segment(segment::SegmentArgs),

    /// Print boundary byte offsets
    Boundaries(boundaries::BoundariesArgs),

    /// Compare two strings
    Collate(collate::CollateArgs),

    /// Sort strings in locale order
    Sort(sort::SortArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// Locales with bundled data
    Locales,

    /// Boundary kinds
    Kinds,

    /// Collation strengths
    Strengths,
}

impl Commands {
    /// Run the command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(config),
            Commands::Boundaries(args) => args.execute(config),
            Commands::Collate(args) => args.execute(config),
            Commands::Sort(args) => args.execute(config),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Stdout formatter for an explicit format or the configured default
fn open_formatter(
    explicit: Option<OutputFormat>,
    config: &CliConfig,
) -> Result<Box<dyn OutputFormatter>> {
    let format = match explicit {
        Some(format) => format,
        None => config.output_format()?,
    };
    Ok(create_formatter(
        format,
        config.output.pretty_json,
        io::stdout().lock(),
    ))
}
