use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use env_logger::Env;

use identifier_validator::config::{Command, Config, OutputFormat};
use identifier_validator::report;
use identifier_validator::shell::Shell;

fn main() -> Result<ExitCode> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    if let Some(path) = &config.config_path {
        log::info!("loaded configuration from {}", path.display());
    }

    let validator = config.validator();

    match &config.command {
        Some(Command::Check {
            category,
            identifiers,
            format,
        }) => {
            let reports = report::check_all(&validator, *category, identifiers.as_slice());
            let mut stdout = io::stdout().lock();
            match format {
                OutputFormat::Text => report::write_text(&mut stdout, &reports)?,
                OutputFormat::Json => report::write_json(&mut stdout, &reports)?,
            }
            stdout.flush().context("Failed to flush stdout")?;

            if report::all_valid(&reports) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            Shell::new(stdin, stdout, validator)
                .run()
                .context("Interactive session failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
