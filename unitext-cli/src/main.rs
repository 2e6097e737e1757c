//! unitext command-line entry point

use clap::Parser;
use std::process::ExitCode;
use unitext_cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let rendered = e.to_string();
            let message = rendered.trim_end();
            eprintln!("Error: {}", message.strip_prefix("error: ").unwrap_or(message));
            return ExitCode::FAILURE;
        }
    };
    cli.init_logging();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
