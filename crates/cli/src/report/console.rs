// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console reporter: every error with a source excerpt and a caret.
//!
//! ```text
//! disallowSpacesInsideParentheses: Illegal space before opening round brace at lib/a.js :
//!      1 |if ( a) {
//! -----------^
//!      2 |}
//!
//! 1 code style error found.
//! ```

use std::io::{self, Write};

use termcolor::WriteColor;

use super::{ReportContext, Reporter, display_path, error_count};
use crate::check::{ErrorCollection, ErrorRecord};
use crate::color::scheme;

/// Lines of context shown around the offending line.
const CONTEXT_LINES: usize = 1;

/// Width of the `{:>6} |` gutter.
const GUTTER_WIDTH: usize = 8;

/// The default reporter.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn name(&self) -> &str {
        "console"
    }

    fn report(
        &self,
        ctx: &ReportContext<'_>,
        errors: &[ErrorCollection],
        out: &mut dyn WriteColor,
    ) -> io::Result<()> {
        for collection in errors.iter().filter(|c| !c.is_empty()) {
            let source = std::fs::read_to_string(ctx.root.join(collection.file())).ok();
            if source.is_none() {
                tracing::debug!("no source excerpt for {}", collection.file().display());
            }
            let lines: Vec<&str> = source
                .as_deref()
                .map(|s| s.lines().collect())
                .unwrap_or_default();

            for record in collection.error_list() {
                write_header(out, collection, record)?;
                write_excerpt(out, &lines, record)?;
                writeln!(out)?;
            }
        }

        match error_count(errors) {
            0 => {
                out.set_color(&scheme::ok())?;
                write!(out, "No code style errors found.")?;
                out.reset()?;
                writeln!(out)
            }
            n => {
                out.set_color(&scheme::error())?;
                write!(
                    out,
                    "{} code style {} found.",
                    n,
                    if n == 1 { "error" } else { "errors" }
                )?;
                out.reset()?;
                writeln!(out)
            }
        }
    }
}

fn write_header(
    out: &mut dyn WriteColor,
    collection: &ErrorCollection,
    record: &ErrorRecord,
) -> io::Result<()> {
    if let Some(rule) = &record.rule {
        out.set_color(&scheme::rule())?;
        write!(out, "{}", rule)?;
        out.reset()?;
        write!(out, ": ")?;
    }
    out.set_color(&scheme::error())?;
    write!(out, "{}", record.message)?;
    out.reset()?;
    write!(out, " at ")?;
    out.set_color(&scheme::path())?;
    write!(out, "{}", display_path(collection.file()))?;
    out.reset()?;
    writeln!(out, " :")
}

fn write_excerpt(out: &mut dyn WriteColor, lines: &[&str], record: &ErrorRecord) -> io::Result<()> {
    let line = record.line as usize;
    if line == 0 || line > lines.len() {
        return Ok(());
    }

    let first = line.saturating_sub(CONTEXT_LINES).max(1);
    let last = (line + CONTEXT_LINES).min(lines.len());
    for number in first..=last {
        out.set_color(&scheme::gutter())?;
        write!(out, "{:>6} |", number)?;
        out.reset()?;
        writeln!(out, "{}", lines[number - 1])?;

        if number == line {
            out.set_color(&scheme::caret())?;
            write!(
                out,
                "{}^",
                "-".repeat(GUTTER_WIDTH + record.column as usize)
            )?;
            out.reset()?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
