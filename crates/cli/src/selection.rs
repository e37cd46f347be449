// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File selection: expands paths, directories and globs into the file list
//! handed to the checker, minus anything matching an exclusion pattern.
//!
//! Walking uses the `ignore` crate (gitignore aware, hidden files skipped);
//! globs use `globset` with `*` not crossing `/`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::error::{Error, Result};
use crate::resolver::ResolvedConfig;

/// Directories never descended into.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git"];

/// Which files a run should check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    /// Files, directories or glob patterns, relative to the run root.
    pub patterns: Vec<String>,
    /// Extra exclusion globs (added to the config's `excludeFiles`).
    pub exclude: Vec<String>,
}

impl FileSelection {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            exclude: Vec::new(),
        }
    }

    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(exclude.into_iter().map(Into::into));
        self
    }

    /// Expand the selection into a sorted, de-duplicated file list.
    ///
    /// Paths under `root` come back relative to it. Explicit paths that do
    /// not exist are skipped with a warning.
    pub fn expand(&self, root: &Path, config: &ResolvedConfig) -> Result<Vec<PathBuf>> {
        let mut exclude = self.exclude.clone();
        exclude.extend(config.excluded_files());
        let excludes = build_globset(&exclude)?;
        let extensions = config.file_extensions();

        let mut files = BTreeSet::new();
        for pattern in &self.patterns {
            if is_glob(pattern) {
                for path in glob_walk(root, pattern)? {
                    files.insert(relative(root, &path));
                }
                continue;
            }

            let path = root.join(normalize(pattern));
            if path.is_file() {
                files.insert(relative(root, &path));
            } else if path.is_dir() {
                for file in walk(&path, Filters::Standard) {
                    if has_extension(&file, &extensions) {
                        files.insert(relative(root, &file));
                    }
                }
            } else {
                tracing::warn!("source file not found: {}", pattern);
            }
        }

        let before = files.len();
        let selected: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| !excludes.is_match(path))
            .collect();
        tracing::debug!(
            "selected {} files ({} excluded)",
            selected.len(),
            before - selected.len()
        );

        Ok(selected)
    }
}

/// Expand `additionalRules` patterns into absolute plugin file paths.
pub fn expand_rule_globs(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut rules = BTreeSet::new();
    for pattern in patterns {
        if is_glob(pattern) {
            rules.extend(glob_walk(root, pattern)?);
        } else {
            let path = root.join(normalize(pattern));
            if path.is_file() {
                rules.insert(path);
            } else {
                tracing::warn!("rule file not found: {}", pattern);
            }
        }
    }
    Ok(rules.into_iter().collect())
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

fn normalize(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

/// Files matched by a glob, as absolute paths.
///
/// Relative globs match root-relative paths, absolute globs match absolute
/// ones. Ignore files do not apply: a globbed file is only dropped by an
/// exclusion pattern.
fn glob_walk(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = compile(pattern)?;
    let absolute = Path::new(pattern).is_absolute();
    let files = walk(&root.join(glob_base(pattern)), Filters::Minimal)
        .into_iter()
        .filter(|path| {
            if absolute {
                matcher.is_match(path)
            } else {
                matcher.is_match(relative(root, path))
            }
        })
        .collect();
    Ok(files)
}

/// The literal directory prefix of a glob, e.g. `lib/util` for `lib/util/**/*.js`.
fn glob_base(pattern: &str) -> PathBuf {
    let pattern = normalize(pattern);
    let mut base = if pattern.starts_with('/') {
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };
    base.extend(
        pattern
            .split('/')
            .filter(|part| !part.is_empty())
            .take_while(|part| !is_glob(part)),
    );
    base
}

fn glob(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(normalize(pattern))
        .literal_separator(true)
        .build()
        .map_err(|e| Error::Argument(format!("invalid glob pattern `{pattern}`: {e}")))
}

fn compile(pattern: &str) -> Result<GlobMatcher> {
    Ok(glob(pattern)?.compile_matcher())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(glob(pattern)?);
    }
    builder
        .build()
        .map_err(|e| Error::Argument(format!("invalid exclude patterns: {e}")))
}

fn relative(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    extensions
        .iter()
        .any(|ext| ext == "*" || name.ends_with(ext.as_str()))
}

/// Which ignore rules a walk honors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filters {
    /// Hidden files, `.gitignore` and git excludes.
    Standard,
    /// Only `SKIP_DIRECTORIES`.
    Minimal,
}

/// Walk all files below `dir`, sequentially.
fn walk(dir: &Path, filters: Filters) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    let standard = filters == Filters::Standard;
    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(standard)
        .hidden(standard)
        .git_ignore(standard)
        .git_exclude(standard)
        .follow_links(true)
        .filter_entry(|entry| {
            !entry.file_type().is_some_and(|t| t.is_dir())
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
        });

    let mut files = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|t| t.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => tracing::warn!("walk error: {}", err),
        }
    }
    files
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
