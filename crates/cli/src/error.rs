// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the tglrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Conversion(#[from] tgl_core::ConversionError),

    #[error("{0}")]
    Setup(#[from] tgl_core::SetupError),

    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid entities file {path}: {reason}")]
    EntitiesFile { path: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Conversion failures are usage errors and exit with 2, like clap's own
    /// argument errors; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Conversion(_) => 2,
            _ => 1,
        }
    }
}

/// A specialized Result type for tglrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
