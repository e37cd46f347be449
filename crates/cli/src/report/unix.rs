// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unix reporter: `file:line:column: message`, as understood by editors.

use std::io::{self, Write};

use termcolor::WriteColor;

use super::{ReportContext, Reporter, display_path};
use crate::check::ErrorCollection;

pub struct UnixReporter;

impl Reporter for UnixReporter {
    fn name(&self) -> &str {
        "unix"
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
                match &record.rule {
                    Some(rule) => writeln!(
                        out,
                        "{}:{}:{}: {}: {}",
                        file, record.line, record.column, rule, record.message
                    )?,
                    None => writeln!(
                        out,
                        "{}:{}:{}: {}",
                        file, record.line, record.column, record.message
                    )?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "unix_tests.rs"]
mod tests;
