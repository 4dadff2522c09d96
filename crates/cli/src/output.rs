// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Printing converted values.

use std::io::Write;

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::Result;

/// A converted value in both printable forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub text: String,
    pub json: Value,
}

impl Report {
    pub fn new(text: impl Into<String>, json: Value) -> Self {
        Report {
            text: text.into(),
            json,
        }
    }

    /// Render in the requested format, without a trailing newline.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.text.clone()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.json)?),
        }
    }

    pub fn write_to(&self, format: OutputFormat, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.render(format)?)?;
        Ok(())
    }
}

/// Join values for text output, or `(none)` when there are none.
pub fn join_or_none<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
