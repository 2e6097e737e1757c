//! List command implementation

use anyhow::Result;
use std::io::{self, Write};
use unitext_api::{available_locales, BoundaryKind, Strength};

use super::ListCommands;

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the listing to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Locales => {
                for locale in available_locales() {
                    writeln!(out, "{}", locale.language_tag())?;
                }
            }
            ListCommands::Kinds => {
                for kind in BoundaryKind::ALL {
                    writeln!(out, "{kind}")?;
                }
            }
            ListCommands::Strengths => {
                for strength in Strength::ALL {
                    writeln!(out, "{strength}")?;
                }
            }
        }
        Ok(())
    }
}
