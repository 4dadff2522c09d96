// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod datetime;
pub mod fields;
pub mod resolve;
pub mod set;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use tgl_core::ParamContext;

/// Name reported in conversion errors for the positional argument.
pub(crate) const VALUE_PARAM: &str = "VALUE";

pub(crate) fn value_context() -> ParamContext {
    ParamContext::new(VALUE_PARAM)
}
