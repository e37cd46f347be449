// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One task execution: resolve, select, check, report.

use std::path::Path;

use termcolor::WriteColor;

use crate::check::{Checker, ErrorCollection};
use crate::error::{ExitCode, Result};
use crate::options::ConfigRequest;
use crate::report::ReporterRegistry;
use crate::runner::Run;
use crate::selection::FileSelection;

/// What a finished task leaves behind.
#[derive(Debug)]
pub struct TaskOutcome {
    pub errors: Vec<ErrorCollection>,
    /// "style errors found" notice, when there were any.
    pub notification: Option<String>,
    pub exit_code: ExitCode,
}

impl TaskOutcome {
    pub fn count(&self) -> usize {
        self.errors.iter().map(ErrorCollection::len).sum()
    }
}

/// Run one task to completion.
///
/// The configuration is resolved and the reporter validated before any file
/// is checked.
pub async fn execute(
    request: &ConfigRequest,
    root: &Path,
    selection: &FileSelection,
    checker: &dyn Checker,
    registry: &ReporterRegistry,
    stdout: &mut dyn WriteColor,
) -> Result<TaskOutcome> {
    let mut run = Run::new(request, root)?;
    run.resolve()?;
    registry.resolve(run.meta().reporter.as_deref(), run.root())?;

    run.execute(checker, selection).await?;
    run.report(registry, stdout)?;

    let notification = run.notification();
    let exit_code = run.exit_code();
    Ok(TaskOutcome {
        errors: run.errors().to_vec(),
        notification,
        exit_code,
    })
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
