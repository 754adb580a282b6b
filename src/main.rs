// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, Command};
use geoguessr_api::api::{ApiClient, Credentials};
use geoguessr_api::{AppError, Config};
use serde_json::Value;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    // Config problems must not prevent the config commands from running.
    let loaded_config = Config::load().await;

    let (log_file_path, _guard) = logging::setup_logging(&args, loaded_config.as_ref().ok())?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.command.is_local() {
        return run_local_command(&args.command).await;
    }

    let config = loaded_config?;
    let client = ApiClient::from_config(&config)?;
    let credentials = args
        .cookie
        .as_deref()
        .map(str::trim)
        .filter(|cookie| !cookie.is_empty())
        .map(Credentials::new);

    let output = commands::run_api_command(&args.command, &client, credentials.as_ref()).await?;
    print_json(&output)
}

async fn run_local_command(command: &Command) -> Result<(), AppError> {
    match command {
        Command::ListConfig => println!("{}", commands::handle_list_config_command().await?),
        Command::Config { .. } => {
            println!("{}", commands::handle_config_update_command(command).await?)
        }
        _ => print_json(&commands::handle_endpoints_command()?)?,
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
