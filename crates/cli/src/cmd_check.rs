// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use termcolor::StandardStream;

use jscs_task::cli::{CheckArgs, Cli};
use jscs_task::color::resolve_color;
use jscs_task::error::ExitCode;
use jscs_task::jscs::JscsProcess;
use jscs_task::report::ReporterRegistry;
use jscs_task::task;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let request = args.request()?;
    let selection = args.selection();

    let checker = JscsProcess::locate(&cwd, cli.jscs_bin.as_deref());
    tracing::debug!("checker program: {}", checker.program().display());
    let registry = ReporterRegistry::default();
    let mut stdout = StandardStream::stdout(resolve_color(cli.color_mode()));

    let outcome = crate::block_on(task::execute(
        &request, &cwd, &selection, &checker, &registry, &mut stdout,
    ))??;

    if let Some(notification) = &outcome.notification {
        eprintln!("jscs-task: {}", notification);
    }
    Ok(outcome.exit_code)
}
