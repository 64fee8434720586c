//! Binaris error codes - Entry Point
//!
//! Translates error codes given as arguments, or one per line from stdin.

use log::{debug, info};
use std::process::ExitCode;
use tokio::io::{self, BufReader};

use binaris_error_codes::cli::{run_args, run_stream};
use binaris_error_codes::config::TranslatorConfig;
use binaris_error_codes::error::CliError;
use binaris_error_codes::error::handlers::{exit_code, handle_error};
use binaris_error_codes::utils::logging::setup_logging;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn run() -> Result<(), CliError> {
    let config = TranslatorConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let mut stdout = io::stdout();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        run_args(args.iter().map(String::as_str), &mut stdout, &config).await?;
        return Ok(());
    }

    info!("Reading error codes from stdin...");
    let written = run_stream(BufReader::new(io::stdin()), &mut stdout, &config).await?;
    info!("Translated {} codes", written);
    Ok(())
}
