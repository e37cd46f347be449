// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration: one checking pass from request to report.
//!
//! A run resolves its configuration, expands the file selection, awaits the
//! checker once for the whole batch, keeps the non-null error collections and
//! hands them to a reporter. Resolution failures end the run before any file
//! is checked.

use std::fmt;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use termcolor::{NoColor, WriteColor};

use crate::check::{CheckRequest, Checker, ErrorCollection};
use crate::error::{Error, ExitCode, Result};
use crate::options::{ConfigRequest, MetaOptions, RuleOptions};
use crate::report::{ReportContext, ReporterRegistry};
use crate::resolver::{self, ResolveContext, ResolvedConfig};
use crate::selection::{self, FileSelection};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Created, nothing resolved yet.
    Idle,
    /// Resolving the configuration.
    Resolving,
    /// Configuration resolved; files not checked yet.
    Resolved,
    /// Awaiting the checker.
    Checking,
    /// Error collections stored.
    Collected,
    /// Report written.
    Reported,
    /// Resolution, checking or reporting failed.
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Resolving => "resolving",
            RunState::Resolved => "resolved",
            RunState::Checking => "checking",
            RunState::Collected => "collected",
            RunState::Reported => "reported",
            RunState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One checking pass.
pub struct Run {
    root: PathBuf,
    meta: MetaOptions,
    rules: RuleOptions,
    config: Option<ResolvedConfig>,
    files: Vec<PathBuf>,
    errors: Vec<ErrorCollection>,
    state: RunState,
}

impl Run {
    /// Start a run for `request`, rooted at `root`.
    ///
    /// Fails only when a meta-option has the wrong type.
    pub fn new(request: &ConfigRequest, root: impl Into<PathBuf>) -> Result<Self> {
        let (meta, rules) = request.partition()?;
        Ok(Self {
            root: root.into(),
            meta,
            rules,
            config: None,
            files: Vec::new(),
            errors: Vec::new(),
            state: RunState::Idle,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meta(&self) -> &MetaOptions {
        &self.meta
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Resolved configuration, once `resolve` succeeded.
    pub fn config(&self) -> Option<&ResolvedConfig> {
        self.config.as_ref()
    }

    /// Files handed to the checker by `execute`.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Resolve the configuration. Failures move the run to `Failed`.
    pub fn resolve(&mut self) -> Result<&ResolvedConfig> {
        self.expect_state("resolve", &[RunState::Idle])?;
        self.state = RunState::Resolving;

        let ctx = ResolveContext::new(&self.root);
        match resolver::resolve_partitioned(&self.meta, self.rules.clone(), &ctx) {
            Ok(config) => {
                tracing::debug!("resolved {} rule options", config.options().len());
                self.state = RunState::Resolved;
                Ok(self.config.insert(config))
            }
            Err(e) => {
                self.state = RunState::Failed;
                Err(e)
            }
        }
    }

    /// Check `selection` with `checker` and store the results.
    ///
    /// Resolves first when the run is still idle. The checker is awaited once
    /// for the whole batch.
    pub async fn execute(
        &mut self,
        checker: &dyn Checker,
        selection: &FileSelection,
    ) -> Result<&[ErrorCollection]> {
        if self.state == RunState::Idle {
            self.resolve()?;
        }
        self.expect_state("check", &[RunState::Resolved])?;
        let Some(config) = self.config.as_ref() else {
            return Err(Error::Internal("run resolved without a configuration".into()));
        };

        let prepared = selection.expand(&self.root, config).and_then(|files| {
            let rules = selection::expand_rule_globs(&self.root, &config.additional_rules())?;
            Ok((files, rules))
        });
        let (files, rules) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                self.state = RunState::Failed;
                return Err(e);
            }
        };

        self.state = RunState::Checking;
        tracing::debug!(
            "checking {} files with {} ({} rule plugins)",
            files.len(),
            checker.name(),
            rules.len()
        );
        let request = CheckRequest {
            root: &self.root,
            config,
            files: &files,
            additional_rules: &rules,
            test_additional_rules: config.test_additional_rules(),
        };
        let result = checker.check(&request).await;
        self.files = files;

        match result {
            Ok(collections) => {
                self.set_errors(collections)?;
                Ok(&self.errors)
            }
            Err(e) => {
                self.state = RunState::Failed;
                Err(e)
            }
        }
    }

    /// Store checker results, dropping `None` entries.
    pub fn set_errors(&mut self, collections: Vec<Option<ErrorCollection>>) -> Result<()> {
        self.expect_state("collect", &[RunState::Resolved, RunState::Checking])?;
        let total = collections.len();
        self.errors = collections.into_iter().flatten().collect();
        if self.errors.len() != total {
            tracing::debug!("dropped {} empty checker results", total - self.errors.len());
        }
        self.state = RunState::Collected;
        Ok(())
    }

    pub fn errors(&self) -> &[ErrorCollection] {
        &self.errors
    }

    /// Total number of error records across all collections.
    pub fn count(&self) -> usize {
        self.errors.iter().map(ErrorCollection::len).sum()
    }

    /// Write the report with the selected reporter.
    ///
    /// Output goes to `reporterOutput` (relative to the run root, parent
    /// directories created) when set, to `stdout` otherwise.
    pub fn report(
        &mut self,
        registry: &ReporterRegistry,
        stdout: &mut dyn WriteColor,
    ) -> Result<()> {
        self.expect_state("report", &[RunState::Collected])?;
        match self.write_report(registry, stdout) {
            Ok(()) => {
                self.state = RunState::Reported;
                Ok(())
            }
            Err(e) => {
                self.state = RunState::Failed;
                Err(e)
            }
        }
    }

    fn write_report(&self, registry: &ReporterRegistry, stdout: &mut dyn WriteColor) -> Result<()> {
        let reporter = registry.resolve(self.meta.reporter.as_deref(), &self.root)?;
        let ctx = ReportContext { root: &self.root };
        let reporter_error = |e: std::io::Error| Error::Reporter {
            name: reporter.name().to_string(),
            message: e.to_string(),
        };

        let Some(output) = &self.meta.reporter_output else {
            return reporter
                .report(&ctx, &self.errors, stdout)
                .map_err(reporter_error);
        };

        let path = self.root.join(output);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
        let mut writer = NoColor::new(BufWriter::new(file));
        reporter
            .report(&ctx, &self.errors, &mut writer)
            .map_err(reporter_error)?;
        std::io::Write::flush(&mut writer).map_err(|e| Error::io(&path, e))?;
        tracing::debug!("report written to {}", path.display());
        Ok(())
    }

    /// Terminal notice shown when style errors were found.
    pub fn notification(&self) -> Option<String> {
        match self.count() {
            0 => None,
            n => Some(format!("{n} code style errors found!")),
        }
    }

    /// Outcome of the run: errors fail it unless `force` is set.
    pub fn exit_code(&self) -> ExitCode {
        if self.count() == 0 || self.meta.force {
            ExitCode::Success
        } else {
            ExitCode::CheckFailed
        }
    }

    fn expect_state(&self, action: &str, allowed: &[RunState]) -> Result<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(Error::Internal(format!(
                "cannot {} a run in state {}",
                action, self.state
            )))
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
