//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::generate_template()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("✓ Configuration written to {}", path.display());
                eprintln!("  Use it with: unitext --config {} <command>", path.display());
            }
            None => print!("{template}"),
        }
        Ok(())
    }

    /// Default configuration as commented TOML
    pub fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# unitext configuration\n\
             #\n\
             # [locale] default: locale used when a command gets none; unset reads\n\
             #   LC_ALL, LC_MESSAGES and LANG.\n\
             # [collation] strength: primary | secondary | tertiary | quaternary | identical\n\
             # [collation] case_first: upper | lower | off\n\
             # [output] format: text | json\n\
             \n\
             {body}"
        ))
    }
}
