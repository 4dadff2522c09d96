// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The common shape of every argument converter.

use crate::error::{ConversionError, ConversionErrorKind};

/// Per-argument context handed to a converter by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamContext {
    name: String,
    default: Option<String>,
}

impl ParamContext {
    pub fn new(name: impl Into<String>) -> Self {
        ParamContext {
            name: name.into(),
            default: None,
        }
    }

    /// Attach the argument's declared default value (raw, as written in the
    /// command definition).
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn name(&self) -> &str {
        if self.name.is_empty() {
            "value"
        } else {
            &self.name
        }
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Wrap a failure with this argument's name and the offending input.
    pub fn fail(&self, raw: &str, kind: ConversionErrorKind) -> ConversionError {
        ConversionError::new(self.name(), raw, kind)
    }
}

/// Turns one raw command-line string into a typed value.
///
/// Implementations hold their configuration and collaborators; `convert`
/// itself never prints, exits or retries.
pub trait Converter {
    type Value;

    fn convert(&self, raw: &str, ctx: &ParamContext) -> Result<Self::Value, ConversionError>;
}

impl<T: Converter + ?Sized> Converter for &T {
    type Value = T::Value;

    fn convert(&self, raw: &str, ctx: &ParamContext) -> Result<Self::Value, ConversionError> {
        (**self).convert(raw, ctx)
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
