//! Command line parsing

use crate::config::{BASE_URL_ENV, ConfigError};

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Help,
    Run { config_path: Option<String> },
}

pub fn usage() -> String {
    format!(
        r#"rollavg - rolling averages over the numbers service

USAGE:
    rollavg [OPTIONS]

OPTIONS:
    -c, --config <PATH>   Load configuration from JSON file
    -h, --help            Print this help message

ENVIRONMENT VARIABLES:
    {env}      Override source.base_url
    RUST_LOG              Log level filter (default: info)

EXAMPLES:
    # Run with the embedded defaults
    rollavg

    # Run with config file
    rollavg --config rollavg.json

    # Point at a local numbers service
    {env}=http://localhost:9000 rollavg
"#,
        env = BASE_URL_ENV
    )
}

/// Parse arguments, program name first
pub fn parse_args(args: &[String]) -> Result<CliCommand, ConfigError> {
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err(ConfigError::Invalid(
                        "--config requires a path argument".to_string(),
                    ));
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                return Err(ConfigError::Invalid(format!("Unknown argument: {}", arg)));
            }
        }
        i += 1;
    }

    Ok(CliCommand::Run { config_path })
}
