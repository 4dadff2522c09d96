// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comma-delimited sets and `+`/`-` modifiers.
//!
//! `a, b ,c` is the literal set `{a, b, c}`. When every token carries a sign,
//! as in `+urgent,-stale`, the input is a patch instead: a [`Modifier`] that
//! adds `urgent` and removes `stale` from whatever the caller already has.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::convert::{Converter, ParamContext};
use crate::error::{ConversionError, ConversionErrorKind, Result};

/// Delimiter between tokens.
pub const DELIMITER: char = ',';

/// Split on [`DELIMITER`] and trim every piece, keeping input order.
pub(crate) fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(DELIMITER).map(str::trim)
}

/// Parse a delimited list into a set of trimmed tokens.
///
/// Empty or absent input means "no value" and returns `None`.
pub fn parse_set(raw: Option<&str>) -> Option<BTreeSet<String>> {
    let raw = raw.filter(|s| !s.is_empty())?;
    Some(split_tokens(raw).map(str::to_string).collect())
}

/// Tokens to add and remove. A token is never in both sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modifier {
    pub additions: BTreeSet<String>,
    pub removals: BTreeSet<String>,
}

impl Modifier {
    /// Record an addition, cancelling an earlier removal of the same token.
    pub fn add(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.removals.remove(&value);
        self.additions.insert(value);
    }

    /// Record a removal, cancelling an earlier addition of the same token.
    pub fn remove(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.additions.remove(&value);
        self.removals.insert(value);
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    /// Apply the patch to an existing set.
    pub fn apply(&self, base: &BTreeSet<String>) -> BTreeSet<String> {
        base.iter()
            .filter(|v| !self.removals.contains(*v))
            .chain(self.additions.iter())
            .cloned()
            .collect()
    }
}

/// Either a replacement set or a patch over the caller's current set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SetValue {
    Literal(BTreeSet<String>),
    Diff(Modifier),
}

impl SetValue {
    /// Resolve against the caller's current set.
    pub fn apply(&self, current: &BTreeSet<String>) -> BTreeSet<String> {
        match self {
            SetValue::Literal(set) => set.clone(),
            SetValue::Diff(modifier) => modifier.apply(current),
        }
    }
}

fn is_signed(token: &str) -> bool {
    token.starts_with('+') || token.starts_with('-')
}

/// Parse a delimited list that may be written as a `+`/`-` patch.
///
/// Returns `Ok(None)` for empty or absent input. The input is a diff only when
/// every token is signed; one unsigned token makes the whole input a literal
/// set, signs included. When a token is both added and removed, the later
/// occurrence wins.
///
/// # Errors
///
/// Fails if a sign has no value after it.
pub fn parse_modifier_set(raw: Option<&str>) -> Result<Option<SetValue>> {
    let Some(tokens) = parse_set(raw) else {
        return Ok(None);
    };

    if !tokens.iter().all(|t| is_signed(t)) {
        return Ok(Some(SetValue::Literal(tokens)));
    }

    let mut modifier = Modifier::default();
    // Walk the raw input rather than the set so the later occurrence wins.
    for token in split_tokens(raw.unwrap_or_default()) {
        let mut chars = token.chars();
        let sign = chars.next();
        let value = chars.as_str();
        if value.is_empty() {
            return Err(ConversionErrorKind::EmptyModifier(token.to_string()));
        }
        match sign {
            Some('+') => modifier.add(value),
            Some('-') => modifier.remove(value),
            _ => unreachable!("diff tokens are all signed"),
        }
    }

    Ok(Some(SetValue::Diff(modifier)))
}

/// Converts an argument into a set of tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetConverter;

impl Converter for SetConverter {
    type Value = Option<BTreeSet<String>>;

    fn convert(&self, raw: &str, _ctx: &ParamContext) -> std::result::Result<Self::Value, ConversionError> {
        Ok(parse_set(Some(raw)))
    }
}

/// Converts an argument into a literal set or a modifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierSetConverter;

impl Converter for ModifierSetConverter {
    type Value = Option<SetValue>;

    fn convert(&self, raw: &str, ctx: &ParamContext) -> std::result::Result<Self::Value, ConversionError> {
        parse_modifier_set(Some(raw)).map_err(|kind| ctx.fail(raw, kind))
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
