// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON reporter: an object keyed by file path, each holding its error list.
//!
//! The same document is fed to external reporter programs on stdin.

use std::io::{self, Write};

use serde_json::{Map, Value};
use termcolor::WriteColor;

use super::{ReportContext, Reporter, display_path};
use crate::check::ErrorCollection;

pub struct JsonReporter;

impl JsonReporter {
    /// Build the JSON document for `errors`.
    pub fn to_value(errors: &[ErrorCollection]) -> io::Result<Value> {
        let mut files = Map::new();
        for collection in errors {
            let records = serde_json::to_value(collection.error_list()).map_err(io::Error::other)?;
            files.insert(display_path(collection.file()), records);
        }
        Ok(Value::Object(files))
    }
}

impl Reporter for JsonReporter {
    fn name(&self) -> &str {
        "json"
    }

    fn report(
        &self,
        _ctx: &ReportContext<'_>,
        errors: &[ErrorCollection],
        out: &mut dyn WriteColor,
    ) -> io::Result<()> {
        let document = Self::to_value(errors)?;
        serde_json::to_writer(&mut *out, &document).map_err(io::Error::other)?;
        writeln!(out)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
