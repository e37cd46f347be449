// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for reporter tests.

// Test helpers that use unwrap for clarity (tests should panic on unexpected failures).
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use termcolor::NoColor;

use super::{ReportContext, Reporter};
use crate::check::{ErrorCollection, ErrorRecord};

/// One file with two errors, one clean file, one file with a syntax error.
pub fn sample_errors() -> Vec<ErrorCollection> {
    vec![
        ErrorCollection::new(
            "lib/a.js",
            vec![
                ErrorRecord::new("Illegal space before opening round brace", 1, 3)
                    .with_rule("disallowSpacesInsideParentheses"),
                ErrorRecord::new("Missing space after `if` keyword", 2, 0)
                    .with_rule("requireSpaceAfterKeywords"),
            ],
        ),
        ErrorCollection::clean("lib/b.js"),
        ErrorCollection::syntax_error("lib/<broken>.js", 3, 13),
    ]
}

/// Render `errors` with `reporter` into a plain string.
pub fn render(reporter: &dyn Reporter, root: &Path, errors: &[ErrorCollection]) -> String {
    let mut out = NoColor::new(Vec::new());
    reporter
        .report(&ReportContext { root }, errors, &mut out)
        .unwrap();
    String::from_utf8(out.into_inner()).unwrap()
}
