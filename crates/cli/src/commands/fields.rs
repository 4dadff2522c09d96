// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use tgl_core::{Converter, FieldSchema, FieldsConverter, ParamContext};

use crate::error::Result;
use crate::output::{join_or_none, Report};

/// Name reported in conversion errors; the value stands in for `--fields`.
const FIELDS_PARAM: &str = "--fields";

pub fn fields(value: &str, schema: &str, default: Option<&str>) -> Result<Report> {
    let schema = FieldSchema::new(schema.split(',').map(str::trim).filter(|f| !f.is_empty()));
    let mut ctx = ParamContext::new(FIELDS_PARAM);
    if let Some(default) = default {
        ctx = ctx.with_default(default);
    }

    let selected = FieldsConverter::new(schema).convert(value, &ctx)?;
    Ok(Report::new(join_or_none(&selected), json!(selected)))
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
