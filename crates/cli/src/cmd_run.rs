// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `jscs-task run` command implementation.

use anyhow::Context;
use serde_json::Value;
use termcolor::StandardStream;

use jscs_task::cli::{Cli, RunArgs};
use jscs_task::color::resolve_color;
use jscs_task::discovery;
use jscs_task::error::{Error, ExitCode};
use jscs_task::jscs::JscsProcess;
use jscs_task::manifest::{self, Manifest, Target};
use jscs_task::report::ReporterRegistry;
use jscs_task::task;

/// Run manifest targets; the worst exit code wins.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let manifest_path = discovery::resolve_manifest(cli.manifest.as_deref(), &cwd)?
        .ok_or_else(|| Error::Config {
            message: format!(
                "no {} found from {}",
                discovery::MANIFEST_FILE,
                cwd.display()
            ),
            path: None,
        })?;
    tracing::debug!("loading manifest from {}", manifest_path.display());
    let manifest = manifest::load(&manifest_path)?;

    let targets = selected_targets(&manifest, &args.targets)?;
    if targets.is_empty() {
        eprintln!(
            "jscs-task: warning: {}: no targets defined",
            manifest_path.display()
        );
        return Ok(ExitCode::Success);
    }

    let root = manifest.root();
    let checker = JscsProcess::locate(root, cli.jscs_bin.as_deref());
    let registry = ReporterRegistry::default();
    let mut stdout = StandardStream::stdout(resolve_color(cli.color_mode()));

    let mut worst = ExitCode::Success;
    for target in targets {
        let mut request = target.request(&manifest);
        if args.force {
            request.insert("force", Value::Bool(true));
        }

        let result = crate::block_on(task::execute(
            &request,
            root,
            &target.selection(),
            &checker,
            &registry,
            &mut stdout,
        ))
        .with_context(|| format!("target {}", target.name))?;

        let code = match result {
            Ok(outcome) => {
                if let Some(notification) = &outcome.notification {
                    eprintln!("jscs-task: {}: {}", target.name, notification);
                }
                outcome.exit_code
            }
            Err(e) => {
                eprintln!("jscs-task: {}: {}", target.name, e);
                ExitCode::from(&e)
            }
        };
        worst = worst.max(code);
    }

    Ok(worst)
}

/// Named targets in the given order, or all of them in name order.
fn selected_targets<'a>(
    manifest: &'a Manifest,
    names: &[String],
) -> jscs_task::Result<Vec<&'a Target>> {
    if names.is_empty() {
        return Ok(manifest.targets.values().collect());
    }
    names.iter().map(|name| manifest.target(name)).collect()
}
