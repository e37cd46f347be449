// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::color::ColorMode;
use crate::error::Result;
use crate::options::ConfigRequest;
use crate::selection::FileSelection;

/// Runs the jscs style checker over a project and reports the results
#[derive(Parser)]
#[command(name = "jscs-task")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific task manifest
    #[arg(short = 'm', long = "manifest", global = true, env = "JSCS_TASK_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Checker program (default: node_modules/.bin/jscs, then jscs on PATH)
    #[arg(long = "jscs-bin", global = true, env = "JSCS_BIN", value_name = "PATH")]
    pub jscs_bin: Option<PathBuf>,

    /// Force color output
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_flags(self.color, self.no_color)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Check files with the style checker
    Check(CheckArgs),
    /// Run targets from the task manifest
    Run(RunArgs),
    /// Print the resolved checker configuration as JSON
    Config(ConfigArgs),
    /// List built-in reporters
    Reporters,
}

/// Where rule options come from.
#[derive(clap::Args, Debug, Default)]
pub struct ConfigSourceArgs {
    /// Checker config file (default: discover .jscsrc, .jscs.json, .jscs.yaml or package.json)
    #[arg(short = 'c', long = "config", value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore config files and use inline options only
    #[arg(long)]
    pub no_config: bool,

    /// Inline option, VALUE read as JSON (e.g. -O 'requireCurlyBraces=["if"]')
    #[arg(short = 'O', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,
}

impl ConfigSourceArgs {
    /// The configuration request these flags describe.
    pub fn request(&self) -> Result<ConfigRequest> {
        let mut request = ConfigRequest::default();
        for raw in &self.options {
            let (key, value) = ConfigRequest::parse_inline(raw)?;
            request.insert(key, value);
        }
        if self.no_config {
            request.insert("config", Value::Bool(false));
        } else if let Some(path) = &self.config {
            request.insert("config", Value::String(path.to_string_lossy().into_owned()));
        }
        Ok(request)
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct CheckArgs {
    /// Files, directories or globs to check (default: .)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub source: ConfigSourceArgs,

    /// Reporter name or path to a reporter program
    #[arg(short, long, value_name = "NAME|PATH")]
    pub reporter: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub reporter_output: Option<PathBuf>,

    /// Succeed even when style errors are found
    #[arg(short, long)]
    pub force: bool,

    /// Exclude files matching a glob
    #[arg(short = 'x', long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Load extra rule plugins matching a glob
    #[arg(long, value_name = "GLOB")]
    pub additional_rules: Vec<String>,

    /// Run rule plugins in test mode
    #[arg(long)]
    pub test_additional_rules: bool,
}

impl CheckArgs {
    /// Request from the config flags plus the run flags.
    pub fn request(&self) -> Result<ConfigRequest> {
        let mut request = self.source.request()?;
        if let Some(reporter) = &self.reporter {
            request.insert("reporter", Value::String(reporter.clone()));
        }
        if let Some(output) = &self.reporter_output {
            request.insert(
                "reporterOutput",
                Value::String(output.to_string_lossy().into_owned()),
            );
        }
        if self.force {
            request.insert("force", Value::Bool(true));
        }
        if !self.additional_rules.is_empty() {
            request.insert(
                "additionalRules",
                Value::Array(
                    self.additional_rules
                        .iter()
                        .cloned()
                        .map(Value::String)
                        .collect(),
                ),
            );
        }
        if self.test_additional_rules {
            request.insert("testAdditionalRules", Value::Bool(true));
        }
        Ok(request)
    }

    pub fn selection(&self) -> FileSelection {
        let selection = if self.paths.is_empty() {
            FileSelection::new(["."])
        } else {
            FileSelection::new(self.paths.iter().cloned())
        };
        selection.with_exclude(self.exclude.iter().cloned())
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Targets to run (default: all, in name order)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Succeed even when style errors are found
    #[arg(short, long)]
    pub force: bool,
}

#[derive(clap::Args, Debug, Default)]
pub struct ConfigArgs {
    /// Resolve the options of a manifest target
    #[arg(short, long, value_name = "TARGET")]
    pub target: Option<String>,

    #[command(flatten)]
    pub source: ConfigSourceArgs,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
