// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checkstyle XML reporter, for CI servers that ingest checkstyle reports.

use std::io::{self, Write};

use termcolor::WriteColor;

use super::{ReportContext, Reporter, display_path, xml_escape};
use crate::check::ErrorCollection;

pub struct CheckstyleReporter;

impl Reporter for CheckstyleReporter {
    fn name(&self) -> &str {
        "checkstyle"
    }

    fn report(
        &self,
        _ctx: &ReportContext<'_>,
        errors: &[ErrorCollection],
        out: &mut dyn WriteColor,
    ) -> io::Result<()> {
        writeln!(out, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
        writeln!(out, r#"<checkstyle version="4.3">"#)?;
        for collection in errors {
            writeln!(
                out,
                r#"    <file name="{}">"#,
                xml_escape(&display_path(collection.file()))
            )?;
            for record in collection.error_list() {
                let source = match &record.rule {
                    Some(rule) => format!("jscs.{rule}"),
                    None => "jscs".to_string(),
                };
                writeln!(
                    out,
                    r#"        <error line="{}" column="{}" severity="error" message="{}" source="{}" />"#,
                    record.line,
                    record.column,
                    xml_escape(&record.message),
                    xml_escape(&source)
                )?;
            }
            writeln!(out, "    </file>")?;
        }
        writeln!(out, "</checkstyle>")
    }
}

#[cfg(test)]
#[path = "checkstyle_tests.rs"]
mod tests;
