// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dd_nsxcheck::config::{self, Config};
use dd_nsxcheck::{CollectionOutcome, NsxClient, SuiteApiClient, TestOutcome, collect, test_connection};
use log::{LevelFilter, error, info, warn};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "nsx-check")]
#[command(about = "Publishes NSX transport node health into Aria Operations", long_about = None)]
struct Args {
    /// Configuration file, defaults to $NSX_CHECK_CONFIG or /etc/nsx-check/config.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one collection cycle
    Collect {
        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that the NSX Manager can be reached with the configured credentials
    Test {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    simple_logger::SimpleLogger::new()
        .with_level(args.log_level)
        .init()?;

    let config_path = args.config.unwrap_or_else(config::config_path);
    let config = config::load_config(&config_path)?;
    info!("Loaded configuration from {}", config_path.display());

    match args.command {
        Command::Collect { output } => {
            let outcome = run_collection(&config);
            info!("Returning {} objects", outcome.all_objects().len());
            write_result(&outcome, output.as_deref())
        }
        Command::Test { output } => {
            let outcome = match NsxClient::connect(&config.manager, config.timeout()) {
                Ok(client) => test_connection(&client),
                Err(err) => TestOutcome::failed(format!("Unexpected connection test error: {err}")),
            };
            write_result(&outcome, output.as_deref())
        }
    }
}

fn run_collection(config: &Config) -> CollectionOutcome {
    let operations = match SuiteApiClient::connect(&config.operations, config.timeout()) {
        Ok(client) => client,
        Err(err) => return connection_failure(err),
    };
    let outcome = match NsxClient::connect(&config.manager, config.timeout()) {
        Ok(manager) => collect(&manager, &operations),
        Err(err) => connection_failure(err),
    };
    if let Err(err) = operations.release() {
        warn!("Could not release the Operations token: {err}");
    }
    outcome
}

fn connection_failure(err: dd_nsxcheck::Error) -> CollectionOutcome {
    error!("Unexpected collection error: {err}");
    let mut outcome = CollectionOutcome::new();
    outcome.record_error(format!("Unexpected collection error: {err}"));
    outcome
}

fn write_result<T: Serialize>(result: &T, output: Option<&Path>) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };
    serde_json::to_writer_pretty(&mut writer, result).context("writing result")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
