//! Input handling module

pub mod file_reader;

pub use file_reader::FileReader;

use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::error::CliError;

/// Resolve command input: file first, then the inline argument, then stdin
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        log::debug!("reading input from {}", path.display());
        return FileReader::read_text(path);
    }
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::MissingInput.into());
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}
