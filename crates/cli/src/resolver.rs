// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checker configuration resolution.
//!
//! Combines, in priority order, inline rule options, one file-based config
//! (explicit path or discovered) and nothing else. Inline rule options always
//! win over file options on key collision, and meta-options never reach the
//! resolved result.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::discovery::{self, PACKAGE_CONFIG_KEY, PACKAGE_FILE};
use crate::error::{Error, Result};
use crate::options::{ConfigPath, ConfigRequest, META_KEYS, MetaOptions, json_kind};

/// Explicit context for resolution, replacing any process-wide base directory.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Directory relative paths and discovery start from.
    pub cwd: PathBuf,
}

impl ResolveContext {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Resolve `path` against the context directory unless already absolute.
    pub fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Where the file part of a resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Inline options only.
    Inline,
    /// An explicitly named config file.
    Explicit(PathBuf),
    /// A config file found by discovery.
    Discovered(PathBuf),
}

impl ConfigOrigin {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigOrigin::Inline => None,
            ConfigOrigin::Explicit(p) | ConfigOrigin::Discovered(p) => Some(p),
        }
    }
}

/// The option mapping actually used for a checking run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    options: Map<String, Value>,
    origin: ConfigOrigin,
}

/// Extensions checked when a directory is selected and `fileExtensions` is unset.
pub const DEFAULT_FILE_EXTENSIONS: &[&str] = &[".js"];

impl ResolvedConfig {
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn into_options(self) -> Map<String, Value> {
        self.options
    }

    pub fn origin(&self) -> &ConfigOrigin {
        &self.origin
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// `excludeFiles` glob patterns.
    pub fn excluded_files(&self) -> Vec<String> {
        self.string_list("excludeFiles")
    }

    /// `additionalRules` glob patterns locating rule plugins.
    pub fn additional_rules(&self) -> Vec<String> {
        self.string_list("additionalRules")
    }

    /// Whether `testAdditionalRules` asks the checker to run plugins in test mode.
    pub fn test_additional_rules(&self) -> bool {
        matches!(self.options.get("testAdditionalRules"), Some(Value::Bool(true)))
    }

    /// `fileExtensions`, normalized to a leading dot; `*` matches everything.
    pub fn file_extensions(&self) -> Vec<String> {
        let list = match self.options.get("fileExtensions") {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(_)) => self.string_list("fileExtensions"),
            _ => Vec::new(),
        };
        if list.is_empty() {
            return DEFAULT_FILE_EXTENSIONS.iter().map(|s| s.to_string()).collect();
        }
        list.into_iter()
            .map(|ext| {
                if ext == "*" || ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect()
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        match self.options.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

/// Resolve a request into the configuration handed to the checker.
pub fn resolve(request: &ConfigRequest, ctx: &ResolveContext) -> Result<ResolvedConfig> {
    let (meta, rules) = request.partition()?;
    resolve_partitioned(&meta, rules, ctx)
}

/// Resolution over an already partitioned request.
pub fn resolve_partitioned(
    meta: &MetaOptions,
    rules: Map<String, Value>,
    ctx: &ResolveContext,
) -> Result<ResolvedConfig> {
    let (file_options, origin) = match &meta.config {
        ConfigPath::Path(given) => {
            let path = ctx.absolutize(given);
            if !path.exists() {
                return Err(Error::ConfigNotFound {
                    path: given.clone(),
                });
            }
            let options = load_config_file(&path)?;
            if options.is_empty() {
                return Err(Error::ConfigEmpty {
                    path: given.clone(),
                });
            }
            tracing::debug!("loaded checker config from {}", path.display());
            (options, ConfigOrigin::Explicit(path))
        }
        ConfigPath::Disabled => {
            if rules.is_empty() {
                return Err(Error::NoConfigFound);
            }
            (Map::new(), ConfigOrigin::Inline)
        }
        ConfigPath::Unset => match discovery::find_checker_config(&ctx.cwd) {
            Some(path) => {
                tracing::debug!("discovered checker config at {}", path.display());
                let options = load_config_file(&path)?;
                (options, ConfigOrigin::Discovered(path))
            }
            None => {
                tracing::debug!("no checker config found from {}", ctx.cwd.display());
                (Map::new(), ConfigOrigin::Inline)
            }
        },
    };

    let options = merge(file_options, rules);
    if options.is_empty() {
        return Err(Error::NoConfigFound);
    }

    Ok(ResolvedConfig { options, origin })
}

/// Overlay inline rule options on file options; inline wins per key.
fn merge(mut file_options: Map<String, Value>, rules: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in rules {
        file_options.insert(key, value);
    }
    for key in META_KEYS {
        file_options.remove(*key);
    }
    file_options
}

/// Load a checker config file.
///
/// `package.json` contributes its `jscsConfig` object, `.yaml`/`.yml` files
/// are YAML, everything else is relaxed JSON (comments, trailing commas).
pub fn load_config_file(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let parse_error = |message: String| Error::Config {
        message: format!("failed to parse {}: {}", path.display(), message),
        path: Some(path.to_path_buf()),
    };

    let is_package = path.file_name().is_some_and(|n| n == PACKAGE_FILE);
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "yaml" || e == "yml");

    let value: Value = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
    } else {
        json5::from_str(&content).map_err(|e| parse_error(e.to_string()))?
    };

    let value = if is_package {
        value.get(PACKAGE_CONFIG_KEY).cloned().unwrap_or(Value::Null)
    } else {
        value
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(parse_error(format!(
            "expected an object at the top level, got {}",
            json_kind(&other)
        ))),
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
