// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Two lookups live here:
//! - checker config (`.jscsrc`, `.jscs.json`, `.jscs.yaml`, `package.json`
//!   with a `jscsConfig` key), walking from a start directory to the
//!   filesystem root;
//! - the task manifest (`jscs-task.toml`), walking up to the git root.
//!
//! Both take the start directory explicitly; nothing here reads the
//! process working directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Task manifest file name.
pub const MANIFEST_FILE: &str = "jscs-task.toml";

/// Checker config dotfiles, in lookup order within one directory.
pub const CONFIG_FILES: &[&str] = &[".jscsrc", ".jscs.json", ".jscs.yaml"];

/// Package manifest carrying an embedded checker config.
pub const PACKAGE_FILE: &str = "package.json";

/// Key inside `package.json` holding the checker config.
pub const PACKAGE_CONFIG_KEY: &str = "jscsConfig";

/// Find a checker config starting from `start_dir` and walking up.
///
/// In each directory the dotfiles are tried first, then `package.json`
/// (only if it has a `jscsConfig` key).
pub fn find_checker_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = Some(start_dir);

    while let Some(dir) = current {
        for name in CONFIG_FILES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        let package = dir.join(PACKAGE_FILE);
        if package.is_file() && package_has_config(&package) {
            return Some(package);
        }

        current = dir.parent();
    }

    None
}

/// Whether a `package.json` carries a `jscsConfig` key.
fn package_has_config(path: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(path) else {
        return false;
    };
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => value.get(PACKAGE_CONFIG_KEY).is_some(),
        Err(e) => {
            tracing::debug!("ignoring unparsable {}: {}", path.display(), e);
            false
        }
    }
}

/// Find jscs-task.toml starting from `start_dir` and walking up to git root.
pub fn find_manifest(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let manifest_path = current.join(MANIFEST_FILE);
        if manifest_path.exists() {
            return Some(manifest_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve the manifest path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-m`/`--manifest` (clap also reads `JSCS_TASK_MANIFEST`)
/// 2. Discovery from `cwd` up to git root
/// 3. None
pub fn resolve_manifest(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            if path.exists() {
                Ok(Some(path))
            } else {
                Err(Error::Config {
                    message: format!("manifest not found: {}", path.display()),
                    path: Some(path),
                })
            }
        }
        None => Ok(find_manifest(cwd)),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
