//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use crate::check::{CheckRequest, Checker, ErrorCollection, ErrorRecord};
use crate::error::{Error, Result};

/// Creates a temp directory with a `.jscsrc` holding `config`.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".jscsrc"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = TempDir::new().unwrap();
/// create_tree(tmp.path(), &[
///     ("lib/a.js", "var a = 1;"),
///     ("test/fixtures/exclude.js", "var b=2"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Checker double with scripted per-file results.
///
/// Files are matched by their path as given in the request. Unscripted
/// files come back clean; files listed in `unknown` come back as `None`.
#[derive(Default)]
pub struct FakeChecker {
    pub results: Vec<(String, Vec<ErrorRecord>)>,
    pub syntax_errors: Vec<String>,
    pub unknown: Vec<String>,
    pub fail_with: Option<String>,
    pub seen: Mutex<Vec<String>>,
}

impl FakeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_errors(mut self, file: &str, count: usize) -> Self {
        let records = (0..count)
            .map(|i| {
                ErrorRecord::new("Illegal space before opening round brace", i as u32 + 1, 4)
                    .with_rule("disallowSpacesInsideParentheses")
            })
            .collect();
        self.results.push((file.to_string(), records));
        self
    }

    pub fn with_syntax_error(mut self, file: &str) -> Self {
        self.syntax_errors.push(file.to_string());
        self
    }

    pub fn with_unknown(mut self, file: &str) -> Self {
        self.unknown.push(file.to_string());
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    /// Files handed to the last `check` call, in order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Checker for FakeChecker {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn check(&self, request: &CheckRequest<'_>) -> Result<Vec<Option<ErrorCollection>>> {
        let files: Vec<String> = request
            .files
            .iter()
            .map(|f| f.to_string_lossy().replace('\\', "/"))
            .collect();
        *self.seen.lock().unwrap() = files.clone();

        if let Some(message) = &self.fail_with {
            return Err(Error::CheckerInvocation(message.clone()));
        }

        Ok(files
            .into_iter()
            .map(|file| {
                if self.unknown.contains(&file) {
                    return None;
                }
                if self.syntax_errors.contains(&file) {
                    return Some(ErrorCollection::syntax_error(file, 1, 5));
                }
                let errors = self
                    .results
                    .iter()
                    .find(|(name, _)| *name == file)
                    .map(|(_, records)| records.clone())
                    .unwrap_or_default();
                Some(ErrorCollection::new(file, errors))
            })
            .collect())
    }
}
