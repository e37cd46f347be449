// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `jscs-task config` command implementation.

use serde_json::Value;

use jscs_task::cli::{Cli, ConfigArgs};
use jscs_task::discovery;
use jscs_task::error::{Error, ExitCode};
use jscs_task::manifest;
use jscs_task::resolver::{self, ResolveContext};

/// Print the resolved checker configuration as JSON.
pub fn run(cli: &Cli, args: &ConfigArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let inline = args.source.request()?;

    let (request, root) = match &args.target {
        Some(name) => {
            let path = discovery::resolve_manifest(cli.manifest.as_deref(), &cwd)?
                .ok_or_else(|| Error::Config {
                    message: format!(
                        "no {} found from {}",
                        discovery::MANIFEST_FILE,
                        cwd.display()
                    ),
                    path: None,
                })?;
            let manifest = manifest::load(&path)?;
            let request = manifest.target(name)?.request(&manifest).overlay(&inline);
            (request, manifest.root().to_path_buf())
        }
        None => (inline, cwd),
    };

    let resolved = resolver::resolve(&request, &ResolveContext::new(&root))?;
    if let Some(path) = resolved.origin().path() {
        tracing::debug!("config file: {}", path.display());
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&Value::Object(resolved.into_options()))?
    );
    Ok(ExitCode::Success)
}
