//! unitext CLI library
//!
//! This library provides the command-line interface for unitext
//! segmentation and collation.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

pub use error::{CliError, CliResult};

use commands::Commands;
use config::CliConfig;

/// Unicode segmentation and collation utilities
#[derive(Debug, Parser)]
#[command(name = "unitext")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  unitext segment word \"Hello, world!\" --skip-punctuation --skip-whitespace
  unitext boundaries grapheme \"🇨🇦e\u{301}\"
  unitext collate en-US café cafe
  unitext sort de --numeric item10 item2 item1")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", env = "UNITEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }

    /// Load the configuration file, or defaults when none is given
    pub fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                CliConfig::load(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Run the parsed command line
    pub fn run(&self) -> Result<()> {
        let Some(command) = &self.command else {
            Cli::command().print_help()?;
            println!();
            return Ok(());
        };
        let config = self.load_config()?;
        command.execute(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::ListCommands;
    use unitext_api::{BoundaryKind, Strength};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_segment() {
        let cli = Cli::try_parse_from([
            "unitext",
            "segment",
            "word",
            "Hello, world!",
            "-l",
            "en_US",
            "--skip-punctuation",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Segment(args)) => {
                assert_eq!(args.kind, BoundaryKind::Word);
                assert_eq!(args.text.as_deref(), Some("Hello, world!"));
                assert_eq!(args.locale.as_deref(), Some("en_US"));
                assert!(args.skip_punctuation);
                assert!(!args.skip_whitespace);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_collate_flags() {
        let cli = Cli::try_parse_from([
            "unitext",
            "collate",
            "en-US",
            "a",
            "A",
            "--strength",
            "primary",
            "--numeric",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Collate(args)) => {
                assert_eq!(args.collation.strength, Some(Strength::Primary));
                assert!(args.collation.numeric);
                assert_eq!(args.text1, "a");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["unitext", "segment", "paragraph", "x"]).is_err());
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["unitext", "list", "kinds"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                subcommand: ListCommands::Kinds
            })
        ));
    }
}
