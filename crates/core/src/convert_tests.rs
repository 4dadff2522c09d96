// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

struct Upper;

impl Converter for Upper {
    type Value = String;

    fn convert(&self, raw: &str, ctx: &ParamContext) -> Result<String, ConversionError> {
        if raw.is_empty() {
            return Err(ctx.fail(raw, ConversionErrorKind::UnknownDateTime(raw.to_string())));
        }
        Ok(raw.to_uppercase())
    }
}

#[test]
fn context_without_name_reports_value() {
    let ctx = ParamContext::default();
    assert_eq!(ctx.name(), "value");
    assert_eq!(ctx.default_value(), None);
}

#[test]
fn context_keeps_default() {
    let ctx = ParamContext::new("--fields").with_default("id,name");
    assert_eq!(ctx.name(), "--fields");
    assert_eq!(ctx.default_value(), Some("id,name"));
}

#[test]
fn fail_attaches_param_and_raw() {
    let err = ParamContext::new("--start").fail("soon", ConversionErrorKind::NowNotAllowed);
    assert_eq!(err.param, "--start");
    assert_eq!(err.value, "soon");
}

#[test]
fn converter_by_reference() {
    let converter = Upper;
    let by_ref = &converter;
    let ctx = ParamContext::new("name");
    assert_eq!(by_ref.convert("abc", &ctx).unwrap(), "ABC");
    assert_eq!(by_ref.convert("", &ctx).unwrap_err().param, "name");
}
