// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jscs-task library: configuration resolution, run orchestration and
//! reporting around the jscs JavaScript style checker.

pub mod check;
pub mod cli;
pub mod color;
pub mod discovery;
pub mod error;
pub mod jscs;
pub mod manifest;
pub mod options;
pub mod report;
pub mod resolver;
pub mod runner;
pub mod selection;
pub mod task;

pub use check::{CheckRequest, Checker, ErrorCollection, ErrorRecord};
pub use cli::{CheckArgs, Cli, Command, ConfigArgs, RunArgs};
pub use color::ColorMode;
pub use error::{Error, ExitCode, Result};
pub use options::{ConfigPath, ConfigRequest, MetaOptions};
pub use report::{Reporter, ReporterRegistry};
pub use resolver::{ResolveContext, ResolvedConfig, resolve};
pub use runner::{Run, RunState};
pub use selection::FileSelection;
pub use task::TaskOutcome;

#[cfg(test)]
pub mod test_utils;
