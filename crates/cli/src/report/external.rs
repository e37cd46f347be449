// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-supplied reporter programs.
//!
//! The program receives the JSON report on stdin and its stdout becomes the
//! report. It is validated when the reporter is resolved, before any file is
//! checked.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use termcolor::WriteColor;

use super::{JsonReporter, ReportContext, Reporter};
use crate::check::ErrorCollection;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct ExternalReporter {
    name: String,
    program: PathBuf,
}

impl ExternalReporter {
    /// Validate `selector` as a reporter program, relative to `root`.
    pub fn load(selector: &str, root: &Path) -> Result<Self> {
        let reporter_error = |message: &str| Error::Reporter {
            name: selector.to_string(),
            message: message.to_string(),
        };

        let program = root.join(selector);
        let metadata = std::fs::metadata(&program)
            .map_err(|_| reporter_error("not a built-in reporter and no such file"))?;
        if !metadata.is_file() {
            return Err(reporter_error("reporter path is not a file"));
        }
        if !is_executable(&metadata) {
            return Err(reporter_error("reporter file is not executable"));
        }

        Ok(Self {
            name: selector.to_string(),
            program,
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &std::fs::Metadata) -> bool {
    true
}

impl Reporter for ExternalReporter {
    fn name(&self) -> &str {
        &self.name
    }

    fn report(
        &self,
        ctx: &ReportContext<'_>,
        errors: &[ErrorCollection],
        out: &mut dyn WriteColor,
    ) -> io::Result<()> {
        let document =
            serde_json::to_vec(&JsonReporter::to_value(errors)?).map_err(io::Error::other)?;

        tracing::debug!("running reporter {}", self.program.display());
        let mut child = Command::new(&self.program)
            .current_dir(ctx.root)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // stdin is fed from its own thread while stdout and stderr drain here.
        let writer = child.stdin.take().map(|mut stdin| {
            std::thread::spawn(move || stdin.write_all(&document))
        });
        let output = child.wait_with_output()?;
        if let Some(writer) = writer {
            let written = writer
                .join()
                .map_err(|_| io::Error::other("reporter input writer panicked"))?;
            match written {
                Ok(()) => {}
                // The program may exit without reading all of its input.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                Err(e) => return Err(e),
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(io::Error::other(format!(
                "reporter {} failed ({}): {}",
                self.name,
                output.status,
                stderr.trim()
            )));
        }

        out.write_all(&output.stdout)
    }
}

#[cfg(test)]
#[path = "external_tests.rs"]
mod tests;
