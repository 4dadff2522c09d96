// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tgl-core conversions.

use thiserror::Error;

/// Why a single argument failed to convert.
#[derive(Debug, Error)]
pub enum ConversionErrorKind {
    #[error("'now' support is not allowed here")]
    NowNotAllowed,

    #[error("unknown datetime format: '{0}'")]
    UnknownDateTime(String),

    #[error("modifier '{0}' is missing a value")]
    EmptyModifier(String),

    #[error("field modifiers must start with either '+' or '-' character: '{0}'")]
    FieldModifierSign(String),

    #[error("unknown field '{field}'\n  hint: valid fields are: {valid}")]
    UnknownField { field: String, valid: String },

    #[error("unknown {entity} under specification '{value}'")]
    UnknownEntity { entity: String, value: String },

    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

/// Coarse classification of conversion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input matches no recognized syntax.
    Format,
    /// The input is well-formed but refers to something unknown.
    Validation,
    /// The lookup collaborator itself failed.
    Lookup,
}

impl ConversionErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConversionErrorKind::NowNotAllowed
            | ConversionErrorKind::UnknownDateTime(_)
            | ConversionErrorKind::EmptyModifier(_)
            | ConversionErrorKind::FieldModifierSign(_) => ErrorCategory::Format,
            ConversionErrorKind::UnknownField { .. } | ConversionErrorKind::UnknownEntity { .. } => {
                ErrorCategory::Validation
            }
            ConversionErrorKind::Lookup(_) => ErrorCategory::Lookup,
        }
    }
}

/// A failed conversion of one command-line argument.
///
/// Carries the parameter name and the raw value so the host can report a
/// usage error without re-deriving context.
#[derive(Debug, Error)]
#[error("invalid value '{value}' for '{param}': {kind}")]
pub struct ConversionError {
    pub param: String,
    pub value: String,
    /// Already part of the message, so not exposed as the error source.
    pub kind: ConversionErrorKind,
}

impl ConversionError {
    pub fn new(param: impl Into<String>, value: impl Into<String>, kind: ConversionErrorKind) -> Self {
        ConversionError {
            param: param.into(),
            value: value.into(),
            kind,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Failure reported by an entity lookup collaborator.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("lookup field '{0}' is not supported")]
    UnsupportedField(String),

    #[error("{0}")]
    Backend(String),
}

/// Invalid construction of a converter or one of its inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("lookup field list cannot be empty\n  hint: the default is: id, name")]
    EmptyLookupFields,

    #[error("invalid time zone '{0}'\n  hint: use 'local', 'utc', or an offset such as '+02:00'")]
    InvalidTimeZone(String),
}

/// A specialized Result type for conversions.
pub type Result<T> = std::result::Result<T, ConversionErrorKind>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
