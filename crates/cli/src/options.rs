// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration requests and meta-option partitioning.
//!
//! A request is the raw option mapping handed to a run. Four keys control
//! run mechanics (`config`, `force`, `reporter`, `reporterOutput`); every
//! other key is a rule option forwarded to the checker.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Meta-option keys. None of them survive into a resolved configuration.
pub const META_KEYS: &[&str] = &["config", "force", "reporter", "reporterOutput"];

/// Rule options: every non-meta key of a request.
pub type RuleOptions = Map<String, Value>;

/// Where the checker config file should come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigPath {
    /// No `config` key: let discovery find one.
    #[default]
    Unset,
    /// `config = false`: rely on inline options only.
    Disabled,
    /// An explicit path, absolute or relative to the working directory.
    Path(PathBuf),
}

/// Options that control run mechanics rather than style rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaOptions {
    pub config: ConfigPath,
    /// Style errors do not fail the task.
    pub force: bool,
    /// Reporter name or path (None = default reporter).
    pub reporter: Option<String>,
    /// Write the report to this file instead of stdout.
    pub reporter_output: Option<PathBuf>,
}

/// The raw option mapping supplied for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigRequest {
    options: Map<String, Value>,
}

impl ConfigRequest {
    pub fn new(options: Map<String, Value>) -> Self {
        Self { options }
    }

    /// Build a request from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(options) => Ok(Self { options }),
            other => Err(Error::Argument(format!(
                "options must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.options.insert(key.into(), value);
    }

    /// Layer `other` on top of `self`; keys from `other` win.
    pub fn overlay(mut self, other: &ConfigRequest) -> Self {
        for (key, value) in &other.options {
            self.options.insert(key.clone(), value.clone());
        }
        self
    }

    /// Parse a `key=value` option given on the command line.
    ///
    /// The value is read as relaxed JSON (`true`, `["if", "else"]`, `{a: 1}`)
    /// and falls back to a plain string.
    pub fn parse_inline(raw: &str) -> Result<(String, Value)> {
        let Some((key, value)) = raw.split_once('=') else {
            return Err(Error::Argument(format!(
                "invalid option `{raw}`: expected KEY=VALUE"
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::Argument(format!(
                "invalid option `{raw}`: empty key"
            )));
        }
        let value = json5::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.into()));
        Ok((key.to_string(), value))
    }

    /// Split the request into meta-options and rule options.
    pub fn partition(&self) -> Result<(MetaOptions, RuleOptions)> {
        let mut meta = MetaOptions::default();
        let mut rules = RuleOptions::new();

        for (key, value) in &self.options {
            match key.as_str() {
                "config" => meta.config = parse_config_path(value)?,
                "force" => {
                    meta.force = match value {
                        Value::Bool(b) => *b,
                        Value::Null => false,
                        other => return Err(invalid_meta("force", "a boolean", other)),
                    }
                }
                "reporter" => meta.reporter = parse_optional_string("reporter", value)?,
                "reporterOutput" => {
                    meta.reporter_output =
                        parse_optional_string("reporterOutput", value)?.map(PathBuf::from)
                }
                _ => {
                    rules.insert(key.clone(), value.clone());
                }
            }
        }

        Ok((meta, rules))
    }
}

fn parse_config_path(value: &Value) -> Result<ConfigPath> {
    match value {
        Value::Null | Value::Bool(true) => Ok(ConfigPath::Unset),
        Value::Bool(false) => Ok(ConfigPath::Disabled),
        Value::String(s) if s.is_empty() => Ok(ConfigPath::Unset),
        Value::String(s) => Ok(ConfigPath::Path(PathBuf::from(s))),
        other => Err(invalid_meta("config", "a path or false", other)),
    }
}

/// Strings, with the empty string and null meaning "not set".
fn parse_optional_string(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(invalid_meta(key, "a string", other)),
    }
}

fn invalid_meta(key: &str, expected: &str, got: &Value) -> Error {
    Error::Argument(format!(
        "option `{key}` must be {expected}, got {}",
        json_kind(got)
    ))
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
