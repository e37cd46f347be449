// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inline reporter: one line per error.
//!
//! `lib/a.js: line 1, col 3, Illegal space before opening round brace`

use std::io::{self, Write};

use termcolor::WriteColor;

use super::{ReportContext, Reporter, display_path};
use crate::check::ErrorCollection;

pub struct InlineReporter;

impl Reporter for InlineReporter {
    fn name(&self) -> &str {
        "inline"
    }

    fn report(
        &self,
        _ctx: &ReportContext<'_>,
        errors: &[ErrorCollection],
        out: &mut dyn WriteColor,
    ) -> io::Result<()> {
        for collection in errors {
            let file = display_path(collection.file());
            for record in collection.error_list() {
                writeln!(
                    out,
                    "{}: line {}, col {}, {}",
                    file, record.line, record.column, record.message
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "inline_tests.rs"]
mod tests;
