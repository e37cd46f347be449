// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JUnit XML reporter: one test case per checked file.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use termcolor::WriteColor;

use super::{ReportContext, Reporter, display_path, error_count, xml_escape};
use crate::check::ErrorCollection;

#[derive(Debug, Clone, Default)]
pub struct JunitReporter {
    /// Fixed suite timestamp; the current time when unset.
    timestamp: Option<DateTime<Utc>>,
}

impl JunitReporter {
    pub fn with_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
        }
    }
}

impl Reporter for JunitReporter {
    fn name(&self) -> &str {
        "junit"
    }

    fn report(
        &self,
        _ctx: &ReportContext<'_>,
        errors: &[ErrorCollection],
        out: &mut dyn WriteColor,
    ) -> io::Result<()> {
        let timestamp = self.timestamp.unwrap_or_else(Utc::now);
        let failures = errors.iter().filter(|c| !c.is_empty()).count();

        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<testsuite name="jscs" tests="{}" failures="{}" errors="{}" timestamp="{}">"#,
            errors.len(),
            failures,
            error_count(errors),
            timestamp.format("%Y-%m-%dT%H:%M:%S")
        )?;
        for collection in errors {
            let name = xml_escape(&display_path(collection.file())).into_owned();
            if collection.is_empty() {
                writeln!(out, r#"  <testcase name="{}" />"#, name)?;
                continue;
            }
            writeln!(
                out,
                r#"  <testcase name="{}" failures="{}">"#,
                name,
                collection.len()
            )?;
            writeln!(
                out,
                r#"    <failure message="{} code style error(s)">"#,
                collection.len()
            )?;
            for record in collection.error_list() {
                writeln!(
                    out,
                    "line {}, col {}, {}",
                    record.line,
                    record.column,
                    xml_escape(&record.message)
                )?;
            }
            writeln!(out, "    </failure>")?;
            writeln!(out, "  </testcase>")?;
        }
        writeln!(out, "</testsuite>")
    }
}

#[cfg(test)]
#[path = "junit_tests.rs"]
mod tests;
