// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task manifest parsing and validation.
//!
//! Handles jscs-task.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::ConfigRequest;
use crate::selection::FileSelection;

/// Currently supported manifest version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the manifest.
const KNOWN_KEYS: &[&str] = &["version", "options", "targets"];

/// Known keys of a target table.
const KNOWN_TARGET_KEYS: &[&str] = &["files", "exclude", "options"];

/// Manifest with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleManifest {
    version: Option<i64>,

    #[serde(default)]
    options: Option<toml::Value>,

    #[serde(default)]
    targets: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// A parsed task manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path of the manifest file.
    pub path: PathBuf,

    /// Task-level options shared by every target.
    pub options: ConfigRequest,

    /// Targets by name.
    pub targets: BTreeMap<String, Target>,
}

/// One named group of files checked with one set of options.
#[derive(Debug, Clone)]
pub struct Target {
    pub name: String,
    pub files: Vec<String>,
    pub exclude: Vec<String>,

    /// Target-level options; win over task-level options.
    pub options: ConfigRequest,
}

impl Manifest {
    /// Directory targets are resolved against.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn target(&self, name: &str) -> Result<&Target> {
        self.targets.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.targets.keys().map(String::as_str).collect();
            Error::Argument(if known.is_empty() {
                format!("unknown target `{name}` (manifest defines no targets)")
            } else {
                format!("unknown target `{name}` (known: {})", known.join(", "))
            })
        })
    }
}

impl Target {
    /// Task-level options with this target's options layered on top.
    pub fn request(&self, manifest: &Manifest) -> ConfigRequest {
        manifest.options.clone().overlay(&self.options)
    }

    pub fn selection(&self) -> FileSelection {
        FileSelection::new(self.files.iter().cloned()).with_exclude(self.exclude.iter().cloned())
    }
}

/// Load a manifest, warning on unknown keys.
pub fn load(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&content, path)
}

/// Parse a manifest, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Manifest> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleManifest =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;
    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported manifest version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let options = match flexible.options {
        Some(value) => options_request(value, "options").map_err(config_error)?,
        None => ConfigRequest::default(),
    };

    let mut targets = BTreeMap::new();
    match flexible.targets {
        Some(toml::Value::Table(table)) => {
            for (name, value) in table {
                let target = parse_target(&name, value, path).map_err(config_error)?;
                targets.insert(name, target);
            }
        }
        Some(_) => return Err(config_error("`targets` must be a table".to_string())),
        None => {}
    }

    Ok(Manifest {
        path: path.to_path_buf(),
        options,
        targets,
    })
}

fn parse_target(
    name: &str,
    value: toml::Value,
    path: &Path,
) -> std::result::Result<Target, String> {
    let toml::Value::Table(table) = value else {
        return Err(format!("target `{name}` must be a table"));
    };

    for key in table.keys() {
        if !KNOWN_TARGET_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("targets.{}.{}", name, key));
        }
    }

    let files = string_list(table.get("files"), &format!("targets.{name}.files"))?;
    if files.is_empty() {
        return Err(format!("target `{name}` has no files"));
    }
    let exclude = string_list(table.get("exclude"), &format!("targets.{name}.exclude"))?;
    let options = match table.get("options") {
        Some(value) => options_request(value.clone(), &format!("targets.{name}.options"))?,
        None => ConfigRequest::default(),
    };

    Ok(Target {
        name: name.to_string(),
        files,
        exclude,
        options,
    })
}

/// Accepts a single string or an array of strings.
fn string_list(value: Option<&toml::Value>, key: &str) -> std::result::Result<Vec<String>, String> {
    match value {
        None => Ok(Vec::new()),
        Some(toml::Value::String(s)) => Ok(vec![s.clone()]),
        Some(toml::Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(String::from)
                    .ok_or_else(|| format!("`{key}` must contain only strings"))
            })
            .collect(),
        Some(_) => Err(format!("`{key}` must be a string or an array of strings")),
    }
}

fn options_request(value: toml::Value, key: &str) -> std::result::Result<ConfigRequest, String> {
    if !value.is_table() {
        return Err(format!("`{key}` must be a table"));
    }
    let json: Value = serde_json::to_value(value).map_err(|e| format!("`{key}`: {e}"))?;
    ConfigRequest::from_value(json).map_err(|e| format!("`{key}`: {e}"))
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "jscs-task: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
