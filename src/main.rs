mod config;
mod dispatch;
mod error;
mod event;
mod http;
mod logger;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use config::{Cli, DispatchConfig, EVENT_PATH_VAR};
use std::{env, path::PathBuf, process::ExitCode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            println!("Error: invalid command-line arguments");
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => {
            println!("Success!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    logger::init(cli.log_level).context("Cannot initialize the logger")?;

    println!("Dispatching");
    let event_path = PathBuf::from(env::var_os(EVENT_PATH_VAR).unwrap_or_default());
    let config = DispatchConfig::from(cli);

    dispatch::run(&config, &event_path).await?;

    Ok(())
}
