//! rollavg binary
//!
//! Usage: `rollavg [-c|--config <path>] [-h|--help]`

use log::{error, info};
use rollavg_runner::{
    AppConfig, CliCommand, ConfigError, build_coordinator, load_config, load_default_config,
    parse_args, run_session, usage,
};
use std::process::ExitCode;

fn load(config_path: Option<String>) -> Result<AppConfig, ConfigError> {
    let config = match config_path {
        Some(path) => {
            info!("Loading config from {}", path);
            load_config(path)?
        }
        None => load_default_config()?,
    };
    let config = config.with_env_overrides();
    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let config_path = match parse_args(&args) {
        Ok(CliCommand::Help) => {
            eprintln!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Ok(CliCommand::Run { config_path }) => config_path,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    let config = match load(config_path) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let coordinator = build_coordinator(&config);
    let summary = run_session(&coordinator).await;

    match summary.to_json_pretty() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed to render reports: {}", err);
            ExitCode::FAILURE
        }
    }
}
