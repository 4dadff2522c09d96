// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;
use tgl_core::{Converter, EntityLookup, LookupFields, ResourceConverter};

use crate::error::Result;
use crate::output::Report;

use super::value_context;

pub fn resolve<L>(value: &str, kind: &str, fields: LookupFields, lookup: L) -> Result<Report>
where
    L: EntityLookup<Entity = Value>,
{
    let converter = ResourceConverter::new(kind, lookup).with_fields(fields);
    let entity = converter.convert(value, &value_context())?;
    Ok(Report::new(serde_json::to_string(&entity)?, entity))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
