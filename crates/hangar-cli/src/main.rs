//! hangar - model-plane order board
//!
//! # Examples
//!
//! ```bash
//! # Show the Kanban board
//! hangar board show
//!
//! # Create an order with two kits
//! hangar order create --name "Jane Doe" --plane "Spitfire:1:1/48" --plane "Zero:2:1/72"
//!
//! # Drag the first pending card to the top of moulding
//! hangar board move --from pending:0 --to moulding:0
//! ```

use hangar_cli::cli::Cli;
use hangar_cli::runner::{self, Output};
use hangar_cli::{Client, logger};
use hangar_config::{Config, ConfigErrorResult};

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    // Server URL: explicit flag > config
    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.server.url.clone());

    let client = match Client::with_timeout(
        &server_url,
        Duration::from_secs(config.server.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pretty = cli.pretty;

    match runner::run(cli, &client, &config).await {
        Ok(Output::Json(value)) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Ok(Output::Text(text)) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Output::Nothing) => ExitCode::SUCCESS,
        Err(failure) => {
            error!("{} failed: {}", failure.action, failure.source);
            failure.notice().emit();
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration, from `--config-dir` when given.
fn load_config(config_dir: Option<&Path>) -> ConfigErrorResult<Config> {
    let config = match config_dir {
        Some(dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;
    Ok(config)
}
