// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use tgl_core::{Converter, ModifierSetConverter, SetConverter, SetValue};

use crate::error::Result;
use crate::output::{join_or_none, Report};

use super::value_context;

pub fn set(value: &str) -> Result<Report> {
    let parsed = SetConverter.convert(value, &value_context())?;
    let text = join_or_none(parsed.iter().flatten());
    Ok(Report::new(text, json!(parsed)))
}

pub fn modifier(value: &str) -> Result<Report> {
    let parsed = ModifierSetConverter.convert(value, &value_context())?;
    let text = match &parsed {
        None => join_or_none(std::iter::empty::<&str>()),
        Some(SetValue::Literal(values)) => join_or_none(values),
        Some(SetValue::Diff(modifier)) => {
            let added = modifier.additions.iter().map(|v| format!("+{}", v));
            let removed = modifier.removals.iter().map(|v| format!("-{}", v));
            join_or_none(added.chain(removed))
        }
    };
    Ok(Report::new(text, serde_json::to_value(parsed)?))
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
