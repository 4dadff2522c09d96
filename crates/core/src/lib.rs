// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tgl-core: argument conversion for the tgl time-tracking CLI.
//!
//! Every converter turns one raw command-line string into a typed value or a
//! [`ConversionError`]. Converters receive their settings and collaborators
//! explicitly, so each one can be exercised on its own.
//!
//! - [`datetime`] - dates, times, `now`, and duration shorthand
//! - [`resolve`] - entity lookup by id, then name
//! - [`set`] - comma-delimited sets and `+`/`-` modifiers
//! - [`fields`] - `--fields` selection against an entity schema

pub mod config;
pub mod convert;
pub mod datetime;
pub mod duration;
pub mod error;
pub mod fields;
pub mod resolve;
pub mod set;

pub use config::{DateTimeSettings, TimeZoneSetting};
pub use convert::{Converter, ParamContext};
pub use datetime::{
    parse_datetime, parse_datetime_or_duration, Clock, DateTimeConverter,
    DateTimeOrDurationConverter, SystemClock, Temporal,
};
pub use duration::{fold_duration, UnitDuration};
pub use error::{ConversionError, ConversionErrorKind, ErrorCategory, LookupError, SetupError};
pub use fields::{parse_fields, FieldSchema, FieldsConverter, OrderedFieldSet};
pub use resolve::{
    resolve_entity, Diagnostics, EntityLookup, LookupFields, LookupOutcome, LookupValue,
    ResourceConverter, TracingDiagnostics,
};
pub use set::{parse_modifier_set, parse_set, Modifier, ModifierSetConverter, SetConverter, SetValue};
