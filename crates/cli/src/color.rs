// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report coloring: when to color and with what.
//!
//! The flags win, then `NO_COLOR`, then `COLOR`. Otherwise reports are
//! colored only on an interactive stdout outside CI.

use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Color preference given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Decide from the environment.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Mode from the `--color` / `--no-color` flag pair; `--no-color` wins.
    pub fn from_flags(color: bool, no_color: bool) -> Self {
        match (color, no_color) {
            (_, true) => ColorMode::Never,
            (true, false) => ColorMode::Always,
            (false, false) => ColorMode::Auto,
        }
    }
}

/// Color choice for report output on stdout.
///
/// `NO_COLOR` set to any value, even empty, disables color.
pub fn resolve_color(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => return ColorChoice::Always,
        ColorMode::Never => return ColorChoice::Never,
        ColorMode::Auto => {}
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || std::env::var_os("CI").is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for reporter output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold rule name.
    pub fn rule() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Red error message.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Green "no errors" summary.
    pub fn ok() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Dimmed gutter for source excerpts.
    pub fn gutter() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }

    /// Red caret under the offending column.
    pub fn caret() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
