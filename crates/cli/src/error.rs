// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// jscs-task error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An explicitly named checker config file does not exist.
    #[error("config file \"{}\" was not found", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// A checker config file parsed to an empty mapping.
    #[error("\"{}\" config is empty", .path.display())]
    ConfigEmpty { path: PathBuf },

    /// No config file was resolved and no inline rule options were given.
    #[error("neither a config file nor inline options were found")]
    NoConfigFound,

    /// Config or manifest file is invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments or option values
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external checker could not be run or rejected the batch.
    #[error("checker error: {0}")]
    CheckerInvocation(String),

    /// A reporter could not be resolved or loaded.
    #[error("reporter error: {name}: {message}")]
    Reporter { name: String, message: String },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type using jscs-task Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ExitCode {
    /// No style errors (or `force` was set)
    Success = 0,
    /// Style errors were found
    CheckFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// The checker could not run, or an internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::ConfigNotFound { .. }
            | Error::ConfigEmpty { .. }
            | Error::NoConfigFound
            | Error::Config { .. }
            | Error::Argument(_)
            | Error::Reporter { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::CheckerInvocation(_) => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
