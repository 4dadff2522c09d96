// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field selection for entity output (`--fields`).
//!
//! A plain list such as `id,name` replaces the default columns. A list where
//! any token carries a sign (`+desc`, `-id,+desc`) is a patch applied to the
//! command's default columns instead:
//!
//! ```text
//! default: id, name
//! +desc      ->  id, name, desc
//! -id,+desc  ->  name, desc
//! ```
//!
//! Every field name is checked against the entity's [`FieldSchema`].

use serde::Serialize;

use crate::convert::{Converter, ParamContext};
use crate::error::{ConversionError, ConversionErrorKind, Result};
use crate::set::split_tokens;

/// A field an entity exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    /// Whether the field can be shown in output. Write-only fields are still
    /// legal names but are left out of help listings.
    pub readable: bool,
}

/// The legal field names of one entity type, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<FieldSpec>,
}

impl FieldSchema {
    /// Build a schema where every field is readable.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut schema = FieldSchema::default();
        for name in names {
            schema.insert(name, true);
        }
        schema
    }

    /// Add a field that is accepted but not readable.
    pub fn with_write_only(mut self, name: impl Into<String>) -> Self {
        self.insert(name, false);
        self
    }

    fn insert(&mut self, name: impl Into<String>, readable: bool) {
        let name = name.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.readable = readable,
            None => self.fields.push(FieldSpec { name, readable }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Readable field names, comma-separated, for help and error hints.
    pub fn help_list(&self) -> String {
        self.fields
            .iter()
            .filter(|f| f.readable)
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn check(&self, field: &str) -> Result<()> {
        if self.contains(field) {
            Ok(())
        } else {
            Err(ConversionErrorKind::UnknownField {
                field: field.to_string(),
                valid: self.help_list(),
            })
        }
    }
}

/// Field names in order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedFieldSet(Vec<String>);

impl OrderedFieldSet {
    pub fn new() -> Self {
        OrderedFieldSet::default()
    }

    /// Parse a comma-delimited default such as `"id, name"`.
    ///
    /// Tokens are trimmed, empty tokens skipped and repeats dropped.
    pub fn from_delimited(raw: &str) -> Self {
        split_tokens(raw).filter(|t| !t.is_empty()).collect()
    }

    /// Append `field` unless it is already present. Existing fields keep
    /// their position.
    pub fn push_if_absent(&mut self, field: impl Into<String>) -> bool {
        let field = field.into();
        if self.contains(&field) {
            return false;
        }
        self.0.push(field);
        true
    }

    /// Remove `field` if present.
    pub fn remove(&mut self, field: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|f| f != field);
        self.0.len() != before
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f == field)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedFieldSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = OrderedFieldSet::new();
        for field in iter {
            set.push_if_absent(field);
        }
        set
    }
}

/// Parse a `--fields` value.
///
/// Without any `+` or `-` in the input, the list is taken literally: every
/// token must be a known field and the list is returned as written,
/// duplicates included. Otherwise every token must be signed and the result
/// is `default` (or an empty list when there is none) with the additions
/// appended and the removals dropped.
///
/// # Errors
///
/// Fails on the first unknown field, or on an unsigned token in a patch.
pub fn parse_fields(
    raw: &str,
    schema: &FieldSchema,
    default: Option<&OrderedFieldSet>,
) -> Result<Vec<String>> {
    if !raw.contains(['+', '-']) {
        return split_tokens(raw)
            .map(|field| schema.check(field).map(|()| field.to_string()))
            .collect();
    }

    let mut out = default.cloned().unwrap_or_default();
    for token in split_tokens(raw) {
        let mut chars = token.chars();
        let sign = chars.next();
        let field = chars.as_str();

        match sign {
            Some('+') => {
                schema.check(field)?;
                out.push_if_absent(field);
            }
            Some('-') => {
                schema.check(field)?;
                out.remove(field);
            }
            _ => return Err(ConversionErrorKind::FieldModifierSign(token.to_string())),
        }
        tracing::trace!("fields after '{}': {:?}", token, out.as_slice());
    }

    Ok(out.into_vec())
}

/// Converts a `--fields` argument for one entity type.
///
/// The argument's declared default, taken from [`ParamContext`], is the
/// baseline for patches.
#[derive(Debug, Clone)]
pub struct FieldsConverter {
    schema: FieldSchema,
}

impl FieldsConverter {
    pub fn new(schema: FieldSchema) -> Self {
        FieldsConverter { schema }
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }
}

impl Converter for FieldsConverter {
    type Value = Vec<String>;

    fn convert(&self, raw: &str, ctx: &ParamContext) -> std::result::Result<Self::Value, ConversionError> {
        let default = ctx.default_value().map(OrderedFieldSet::from_delimited);
        parse_fields(raw, &self.schema, default.as_ref()).map_err(|kind| ctx.fail(raw, kind))
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
