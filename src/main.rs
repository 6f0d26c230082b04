//! app - example command-line processing
//!
//! Prints help or version information depending on the supplied flags.

use app_cli::config::ConfigBuilder;
use app_cli::error::AppError;
use app_cli::{CommandProcessor, Outcome};
use std::io::{self, Write};

/// Environment variable naming an explicit configuration file
const CONFIG_ENV: &str = "APP_CONFIG";

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match run() {
        Ok(outcome) => {
            if let Some(code) = outcome.exit_code() {
                log::debug!("Exiting with code {}", code);
                std::process::exit(code);
            }
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Outcome, AppError> {
    let config_path = std::env::var(CONFIG_ENV).ok();
    let config = ConfigBuilder::new()
        .with_file(config_path.as_deref())
        .build()?;

    let mut processor = CommandProcessor::new(config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let outcome = processor.process(std::env::args_os().skip(1), &mut handle)?;
    handle.flush()?;

    Ok(outcome)
}
