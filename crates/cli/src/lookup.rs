// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entity lookup backed by a JSON file.
//!
//! The file holds an array of objects. A record matches when its `field`
//! equals the looked-up value: integers match numeric fields, text matches
//! string fields.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tgl_core::{EntityLookup, LookupError, LookupOutcome, LookupValue};

use crate::error::{Error, Result};

type Record = Map<String, Value>;

/// In-memory entity collection loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct JsonFileLookup {
    records: Vec<Record>,
}

impl JsonFileLookup {
    pub fn new(records: Vec<Record>) -> Self {
        JsonFileLookup { records }
    }

    /// Read and validate an entities file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|reason| Error::EntitiesFile {
            path: path.display().to_string(),
            reason,
        })
    }

    fn from_json(content: &str) -> std::result::Result<Self, String> {
        let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
        let Value::Array(items) = value else {
            return Err("expected a JSON array of objects".to_string());
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(format!("entry {} is not an object", i)),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!("loaded {} entities", records.len());
        Ok(JsonFileLookup { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn field_matches(field: &Value, value: &LookupValue) -> bool {
    match (field, value) {
        (Value::Number(n), LookupValue::Id(id)) => n.as_i64() == Some(*id),
        (Value::String(s), LookupValue::Text(text)) => s == text,
        _ => false,
    }
}

impl EntityLookup for JsonFileLookup {
    type Entity = Value;

    fn find(
        &self,
        field: &str,
        value: &LookupValue,
    ) -> std::result::Result<LookupOutcome<Value>, LookupError> {
        if !self.records.is_empty() && !self.records.iter().any(|r| r.contains_key(field)) {
            return Err(LookupError::UnsupportedField(field.to_string()));
        }

        let mut found = self
            .records
            .iter()
            .filter(|r| r.get(field).is_some_and(|v| field_matches(v, value)));

        match (found.next(), found.count()) {
            (None, _) => Ok(LookupOutcome::NotFound),
            (Some(record), 0) => Ok(LookupOutcome::Found(Value::Object(record.clone()))),
            (Some(_), rest) => Ok(LookupOutcome::Ambiguous(rest + 1)),
        }
    }
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod tests;
