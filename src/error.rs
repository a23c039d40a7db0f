// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

use thiserror::Error;

/// Errors raised while declaring, parsing or resolving command-line options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("Unrecognized option: {0}")]
    UnknownOption(String),

    #[error("Missing argument for option: {0}")]
    MissingValue(String),

    #[error("Missing required option: {0}")]
    MissingRequiredOption(String),

    /// Registry construction error, only reachable through a bad option table
    #[error("Duplicate option: {0}")]
    DuplicateOption(String),

    /// Non-fatal: collected by the parser, never returned as an `Err`
    #[error("Invalid number for option {option}: {value}")]
    NumericParse { option: String, value: String },

    #[error("Invalid usage: {0}")]
    InvalidUsage(String),
}

impl CliError {
    /// Whether the error must abort the invocation.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CliError::NumericParse { .. })
    }
}


// Local Variables:
// rust-format-on-save: t
// End:
