// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The production checker: runs the `jscs` program as a child process.
//!
//! The resolved options are written to a temporary JSON config and the batch
//! is checked with `--reporter json`, whose output is decoded back into
//! error collections.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::check::{CheckRequest, Checker, ErrorCollection, ErrorRecord};
use crate::error::{Error, Result};

/// Program name looked up on `PATH` when nothing else is found.
pub const DEFAULT_PROGRAM: &str = "jscs";

/// Locally installed checker, relative to the run root.
pub const LOCAL_PROGRAM: &str = "node_modules/.bin/jscs";

/// Exit statuses meaning "the batch was checked" (clean / style errors).
const CHECKED_STATUSES: &[i32] = &[0, 2];

/// Checker backed by the `jscs` executable.
#[derive(Debug, Clone)]
pub struct JscsProcess {
    program: PathBuf,
}

impl JscsProcess {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Pick the program: explicit path, then a local install under `root`,
    /// then `jscs` on `PATH`.
    pub fn locate(root: &Path, explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            let program = if path.is_absolute() || path.components().count() == 1 {
                path.to_path_buf()
            } else {
                root.join(path)
            };
            return Self::new(program);
        }

        let local = root.join(LOCAL_PROGRAM);
        if local.is_file() {
            tracing::debug!("using local checker {}", local.display());
            return Self::new(local);
        }

        Self::new(DEFAULT_PROGRAM)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Write the checker config for one request to a temporary file.
    fn write_config(&self, request: &CheckRequest<'_>) -> Result<tempfile::NamedTempFile> {
        let mut options = request.config.options().clone();
        if !request.additional_rules.is_empty() {
            options.insert(
                "additionalRules".to_string(),
                Value::Array(
                    request
                        .additional_rules
                        .iter()
                        .map(|p| Value::String(p.to_string_lossy().into_owned()))
                        .collect(),
                ),
            );
        }
        if request.test_additional_rules {
            options.insert("testAdditionalRules".to_string(), Value::Bool(true));
        }

        let mut file = tempfile::Builder::new()
            .prefix("jscs-task-")
            .suffix(".json")
            .tempfile()
            .map_err(|e| Error::io(std::env::temp_dir(), e))?;
        let json = serde_json::to_vec_pretty(&Value::Object(options))
            .map_err(|e| Error::Internal(format!("failed to encode checker config: {e}")))?;
        let path = file.path().to_path_buf();
        file.write_all(&json).map_err(|e| Error::io(&path, e))?;
        file.flush().map_err(|e| Error::io(&path, e))?;

        tracing::trace!("checker config written to {}", file.path().display());
        Ok(file)
    }
}

#[async_trait]
impl Checker for JscsProcess {
    fn name(&self) -> &'static str {
        "jscs"
    }

    async fn check(&self, request: &CheckRequest<'_>) -> Result<Vec<Option<ErrorCollection>>> {
        if request.files.is_empty() {
            return Ok(Vec::new());
        }

        // Kept alive until the child exits.
        let config = self.write_config(request)?;

        tracing::debug!(
            "running {} on {} files",
            self.program.display(),
            request.files.len()
        );
        let output = tokio::process::Command::new(&self.program)
            .arg("--config")
            .arg(config.path())
            .arg("--reporter")
            .arg("json")
            .args(request.files)
            .current_dir(request.root)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                Error::CheckerInvocation(format!(
                    "failed to run {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        let status = output.status.code();
        tracing::debug!("{} exited with {:?}", self.program.display(), status);

        match status {
            Some(code) if CHECKED_STATUSES.contains(&code) => {
                parse_json_report(&String::from_utf8_lossy(&output.stdout), request.files)
            }
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let message = stderr.trim();
                Err(Error::CheckerInvocation(if message.is_empty() {
                    format!("{} exited with {}", self.program.display(), output.status)
                } else {
                    message.to_string()
                }))
            }
        }
    }
}

/// One error entry of the checker's JSON report.
#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(default)]
    rule: Option<String>,
    message: String,
    line: u32,
    #[serde(default)]
    column: u32,
}

/// Decode a JSON report into one collection per requested file, in request order.
///
/// Files missing from the report are clean; `null` entries become `None`.
pub fn parse_json_report(output: &str, files: &[PathBuf]) -> Result<Vec<Option<ErrorCollection>>> {
    let output = output.trim();
    let report: HashMap<String, Option<Vec<JsonRecord>>> = if output.is_empty() {
        HashMap::new()
    } else {
        serde_json::from_str(output)
            .map_err(|e| Error::CheckerInvocation(format!("unreadable checker output: {e}")))?
    };

    let mut report: HashMap<String, Option<Vec<JsonRecord>>> = report
        .into_iter()
        .map(|(file, records)| (normalize_key(&file).to_string(), records))
        .collect();

    Ok(files
        .iter()
        .map(|file| {
            let key = file.to_string_lossy();
            match report.remove(normalize_key(&key)) {
                None => Some(ErrorCollection::clean(file.clone())),
                Some(None) => None,
                Some(Some(records)) => Some(ErrorCollection::new(
                    file.clone(),
                    records.into_iter().map(into_record).collect(),
                )),
            }
        })
        .collect())
}

fn normalize_key(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

fn into_record(record: JsonRecord) -> ErrorRecord {
    let base = ErrorRecord::new(record.message, record.line, record.column);
    match record.rule {
        Some(rule) => base.with_rule(rule),
        None => base,
    }
}

#[cfg(test)]
#[path = "jscs_tests.rs"]
mod tests;
