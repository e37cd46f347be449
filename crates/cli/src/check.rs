//! Error records, error collections and the checker seam.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::resolver::ResolvedConfig;

/// One style violation (or syntax error) found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    /// Rule that reported the error (None for errors without a rule, e.g. parse errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    /// Human-readable message.
    pub message: String,

    /// 1-based line.
    pub line: u32,

    /// 0-based column, as reported by the checker.
    pub column: u32,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            rule: None,
            message: message.into(),
            line,
            column,
        }
    }

    /// Attach the rule name.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }
}

/// All error records for one checked file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCollection {
    pub file: PathBuf,
    pub errors: Vec<ErrorRecord>,
}

impl ErrorCollection {
    pub fn new(file: impl Into<PathBuf>, errors: Vec<ErrorRecord>) -> Self {
        Self {
            file: file.into(),
            errors,
        }
    }

    /// A file without errors.
    pub fn clean(file: impl Into<PathBuf>) -> Self {
        Self::new(file, Vec::new())
    }

    /// A file that failed to parse, degraded to a single error record.
    pub fn syntax_error(file: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self::new(
            file,
            vec![ErrorRecord::new(
                format!("Unexpected token ({line}:{column})"),
                line,
                column,
            )],
        )
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn error_list(&self) -> &[ErrorRecord] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Input for one checker invocation.
pub struct CheckRequest<'a> {
    /// Directory the checker runs in; relative file paths resolve against it.
    pub root: &'a Path,
    /// Resolved rule options.
    pub config: &'a ResolvedConfig,
    /// Files to check, after exclusion.
    pub files: &'a [PathBuf],
    /// Rule plugin files expanded from `additionalRules`.
    pub additional_rules: &'a [PathBuf],
    /// Run rule plugins in test mode.
    pub test_additional_rules: bool,
}

/// The external style checker.
///
/// One call checks a whole batch. Implementations are expected to turn a
/// per-file syntax error into an error record for that file instead of
/// failing the batch; an `Err` means the checker itself could not run.
#[async_trait]
pub trait Checker: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Check every file in the request.
    ///
    /// Returns one entry per file; `None` entries stand for results the
    /// checker could not produce and are dropped by the caller.
    async fn check(&self, request: &CheckRequest<'_>) -> Result<Vec<Option<ErrorCollection>>>;
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
