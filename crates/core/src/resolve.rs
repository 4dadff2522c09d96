// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve an argument to a single remote entity.
//!
//! The raw token is tried against each lookup field in order, most specific
//! first (by default `id`, then `name`). The first field with exactly one
//! match wins. A field with several matches is reported as ambiguous and
//! skipped. Every attempted field costs one call to the lookup service, so
//! longer field lists mean more traffic.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::convert::{Converter, ParamContext};
use crate::error::{ConversionError, ConversionErrorKind, LookupError, Result, SetupError};

/// The identifier field; values must be integers to be looked up by it.
pub const ID_FIELD: &str = "id";

/// The value sent to the lookup service for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LookupValue {
    Id(i64),
    Text(String),
}

impl fmt::Display for LookupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupValue::Id(id) => write!(f, "{id}"),
            LookupValue::Text(text) => write!(f, "{text}"),
        }
    }
}

/// How many entities matched a single field lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<E> {
    NotFound,
    Found(E),
    /// More than one entity matched; carries the match count.
    Ambiguous(usize),
}

/// Lookup service for one entity type.
pub trait EntityLookup {
    type Entity;

    /// Find entities whose `field` equals `value`.
    fn find(
        &self,
        field: &str,
        value: &LookupValue,
    ) -> std::result::Result<LookupOutcome<Self::Entity>, LookupError>;
}

impl<L: EntityLookup + ?Sized> EntityLookup for &L {
    type Entity = L::Entity;

    fn find(
        &self,
        field: &str,
        value: &LookupValue,
    ) -> std::result::Result<LookupOutcome<Self::Entity>, LookupError> {
        (**self).find(field, value)
    }
}

/// Receives non-fatal events raised while resolving.
pub trait Diagnostics {
    fn ambiguous_match(&self, param: &str, field: &str, value: &LookupValue, matches: usize);
}

/// Reports diagnostics as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn ambiguous_match(&self, param: &str, field: &str, value: &LookupValue, matches: usize) {
        tracing::warn!(
            "when fetching entity for parameter {}, {} entries matched {} '{}'",
            param,
            matches,
            field,
            value
        );
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn ambiguous_match(&self, param: &str, field: &str, value: &LookupValue, matches: usize) {
        (**self).ambiguous_match(param, field, value, matches)
    }
}

/// Ordered, non-empty list of fields tried when resolving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LookupFields(Vec<String>);

impl LookupFields {
    pub fn new<I, S>(fields: I) -> std::result::Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(SetupError::EmptyLookupFields);
        }
        Ok(LookupFields(fields))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for LookupFields {
    fn default() -> Self {
        LookupFields(vec![ID_FIELD.to_string(), "name".to_string()])
    }
}

impl FromStr for LookupFields {
    type Err = SetupError;

    /// Parse a comma-separated list such as `id,name,email`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LookupFields::new(s.split(',').map(str::trim).filter(|f| !f.is_empty()))
    }
}

/// Resolve `raw` to exactly one entity.
///
/// `entity` names the entity type in the error message and `param` names the
/// argument in diagnostics.
///
/// # Errors
///
/// Fails when no field yields exactly one match, or immediately when the
/// lookup service itself fails.
pub fn resolve_entity<L, D>(
    raw: &str,
    entity: &str,
    fields: &LookupFields,
    lookup: &L,
    diagnostics: &D,
    param: &str,
) -> Result<L::Entity>
where
    L: EntityLookup + ?Sized,
    D: Diagnostics + ?Sized,
{
    for field in fields.iter() {
        let value = if field == ID_FIELD {
            match raw.trim().parse::<i64>() {
                Ok(id) => LookupValue::Id(id),
                Err(_) => {
                    tracing::debug!("'{}' is not an integer, skipping lookup by {}", raw, field);
                    continue;
                }
            }
        } else {
            LookupValue::Text(raw.to_string())
        };

        tracing::debug!("looking up {} by {} = '{}'", entity, field, value);
        match lookup.find(field, &value)? {
            LookupOutcome::Found(found) => return Ok(found),
            LookupOutcome::NotFound => {}
            LookupOutcome::Ambiguous(matches) => {
                diagnostics.ambiguous_match(param, field, &value, matches);
            }
        }
    }

    Err(ConversionErrorKind::UnknownEntity {
        entity: entity.to_string(),
        value: raw.to_string(),
    })
}

/// Converts an argument into an entity fetched through `L`.
#[derive(Debug, Clone)]
pub struct ResourceConverter<L, D = TracingDiagnostics> {
    entity: String,
    fields: LookupFields,
    lookup: L,
    diagnostics: D,
}

impl<L: EntityLookup> ResourceConverter<L, TracingDiagnostics> {
    /// Resolve `entity` values by the default fields (`id`, then `name`).
    pub fn new(entity: impl Into<String>, lookup: L) -> Self {
        ResourceConverter {
            entity: entity.into(),
            fields: LookupFields::default(),
            lookup,
            diagnostics: TracingDiagnostics,
        }
    }
}

impl<L: EntityLookup, D: Diagnostics> ResourceConverter<L, D> {
    pub fn with_fields(mut self, fields: LookupFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_diagnostics<D2: Diagnostics>(self, diagnostics: D2) -> ResourceConverter<L, D2> {
        ResourceConverter {
            entity: self.entity,
            fields: self.fields,
            lookup: self.lookup,
            diagnostics,
        }
    }

    pub fn fields(&self) -> &LookupFields {
        &self.fields
    }
}

impl<L: EntityLookup, D: Diagnostics> Converter for ResourceConverter<L, D> {
    type Value = L::Entity;

    fn convert(&self, raw: &str, ctx: &ParamContext) -> std::result::Result<Self::Value, ConversionError> {
        resolve_entity(raw, &self.entity, &self.fields, &self.lookup, &self.diagnostics, ctx.name())
            .map_err(|kind| ctx.fail(raw, kind))
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
