// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jscs-task CLI entry point.

use std::future::Future;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use jscs_task::cli::{Cli, Command};
use jscs_task::error::ExitCode;
use jscs_task::report::ReporterRegistry;

mod cmd_check;
mod cmd_config;
mod cmd_run;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("JSCS_TASK_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("jscs-task: {}", e);
            match e.downcast_ref::<jscs_task::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Check(args)) => cmd_check::run(&cli, args),
        Some(Command::Run(args)) => cmd_run::run(&cli, args),
        Some(Command::Config(args)) => cmd_config::run(&cli, args),
        Some(Command::Reporters) => {
            for name in ReporterRegistry::default().names() {
                println!("{name}");
            }
            Ok(ExitCode::Success)
        }
    }
}

/// Drive one future to completion on a single-threaded runtime.
pub(crate) fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
