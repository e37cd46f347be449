// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reporters: format and emit the error collections of a run.
//!
//! Built-in reporters are registered by name in a [`ReporterRegistry`]; any
//! other selector is treated as the path of a user-supplied reporter program.

mod checkstyle;
mod console;
mod external;
mod inline;
mod json;
mod junit;
mod unix;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::sync::Arc;

use termcolor::WriteColor;

use crate::check::ErrorCollection;
use crate::error::Result;

pub use checkstyle::CheckstyleReporter;
pub use console::ConsoleReporter;
pub use external::ExternalReporter;
pub use inline::InlineReporter;
pub use json::JsonReporter;
pub use junit::JunitReporter;
pub use unix::UnixReporter;

/// Reporter used when none is selected.
pub const DEFAULT_REPORTER: &str = "console";

/// What a reporter may need besides the collections themselves.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Directory checked file paths are relative to.
    pub root: &'a Path,
}

/// Formats an error collection sequence and writes it out.
pub trait Reporter: Send + Sync {
    /// Name the reporter is selected by.
    fn name(&self) -> &str;

    /// Write the report for `errors`.
    fn report(
        &self,
        ctx: &ReportContext<'_>,
        errors: &[ErrorCollection],
        out: &mut dyn WriteColor,
    ) -> io::Result<()>;
}

/// Reporters by name.
#[derive(Clone)]
pub struct ReporterRegistry {
    reporters: BTreeMap<String, Arc<dyn Reporter>>,
}

impl Default for ReporterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ReporterRegistry {
    /// A registry with no reporters at all.
    pub fn empty() -> Self {
        Self {
            reporters: BTreeMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(ConsoleReporter));
        registry.register(Arc::new(InlineReporter));
        registry.register(Arc::new(UnixReporter));
        registry.register(Arc::new(JsonReporter));
        registry.register(Arc::new(CheckstyleReporter));
        registry.register(Arc::new(JunitReporter::default()));
        registry
    }

    /// Add a reporter, replacing any registered under the same name.
    pub fn register(&mut self, reporter: Arc<dyn Reporter>) {
        self.reporters.insert(reporter.name().to_string(), reporter);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.reporters.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Reporter>> {
        self.reporters.get(name).cloned()
    }

    /// Resolve a reporter selector.
    ///
    /// `None` selects the default reporter, a registered name selects that
    /// reporter, and anything else must be an executable reporter program
    /// (relative paths resolve against `root`).
    pub fn resolve(&self, selector: Option<&str>, root: &Path) -> Result<Arc<dyn Reporter>> {
        let name = selector.unwrap_or(DEFAULT_REPORTER);
        if let Some(reporter) = self.get(name) {
            return Ok(reporter);
        }
        tracing::debug!("reporter `{}` is not built in, trying a program", name);
        Ok(Arc::new(ExternalReporter::load(name, root)?))
    }
}

/// Escape text for use in XML attributes and text nodes.
pub(crate) fn xml_escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Path as shown in reports, with forward slashes.
pub(crate) fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Total number of error records.
pub(crate) fn error_count(errors: &[ErrorCollection]) -> usize {
    errors.iter().map(ErrorCollection::len).sum()
}

#[cfg(test)]
pub mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
