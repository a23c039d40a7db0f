// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

use crate::error::CliError;
use crate::options::{Arity, ValueKind};
use crate::registry::OptionRegistry;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::parser::ValueSource;
use std::collections::BTreeMap;

/// What the command line said about a single option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionValue {
    #[default]
    Absent,
    PresentNoValue,
    PresentWithValue(String),
}

impl OptionValue {
    pub fn is_present(&self) -> bool {
        !matches!(self, OptionValue::Absent)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            OptionValue::PresentWithValue(value) => Some(value),
            _ => None,
        }
    }

    /// The supplied value, `default` if the option was given bare, `None`
    /// if it was not given at all.
    pub fn value_or<'a>(&'a self, default: &'a str) -> Option<&'a str> {
        match self {
            OptionValue::Absent => None,
            OptionValue::PresentNoValue => Some(default),
            OptionValue::PresentWithValue(value) => Some(value),
        }
    }
}

static ABSENT: OptionValue = OptionValue::Absent;

/// Result of a successful parse, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RawArguments {
    values: BTreeMap<String, OptionValue>,
    warnings: Vec<CliError>,
}

impl RawArguments {
    pub fn get(&self, name: &str) -> &OptionValue {
        self.values.get(name).unwrap_or(&ABSENT)
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.get(name).is_present()
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).value()
    }

    /// Non-fatal problems found while parsing
    pub fn warnings(&self) -> &[CliError] {
        &self.warnings
    }

    #[cfg(test)]
    pub(crate) fn with_value(mut self, name: &str, value: OptionValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }
}

/// Parse `argv` (without the program name) against `registry`.
///
/// Options may be spelled `-name` or `--name`. Numeric options that fail to
/// parse are dropped and reported through [`RawArguments::warnings`].
pub fn parse<I, S>(argv: I, registry: &OptionRegistry) -> Result<RawArguments, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = argv
        .into_iter()
        .map(|token| normalize_flag(token.as_ref()))
        .collect();

    let matches = registry
        .command()
        .try_get_matches_from(tokens)
        .map_err(from_clap_error)?;

    let mut raw = RawArguments::default();
    for spec in registry.describe() {
        if matches.value_source(spec.name) != Some(ValueSource::CommandLine) {
            continue;
        }
        let value = match spec.arity {
            Arity::NoArg => OptionValue::PresentNoValue,
            Arity::RequiredArg | Arity::OptionalArg => {
                match matches.get_one::<String>(spec.name) {
                    Some(value) if !value.is_empty() => {
                        OptionValue::PresentWithValue(value.clone())
                    }
                    // `--in=` supplies nothing; `--db=` counts as given bare
                    _ if spec.arity == Arity::RequiredArg => {
                        return Err(CliError::MissingValue(spec.name.to_string()));
                    }
                    _ => OptionValue::PresentNoValue,
                }
            }
        };

        if spec.kind == ValueKind::Number
            && let Some(text) = value.value()
            && text.trim().parse::<i64>().is_err()
        {
            log::debug!("Dropping non-numeric value {:?} for {}", text, spec.name);
            raw.warnings.push(CliError::NumericParse {
                option: spec.name.to_string(),
                value: text.to_string(),
            });
            continue;
        }

        raw.values.insert(spec.name.to_string(), value);
    }

    // A help request is honoured even when required options are missing
    let help_requested = registry.get("help").is_some() && raw.has_option("help");
    if !help_requested
        && let Some(missing) = registry
            .describe()
            .iter()
            .find(|spec| spec.required && !raw.has_option(spec.name))
    {
        return Err(CliError::MissingRequiredOption(missing.name.to_string()));
    }

    Ok(raw)
}

/// Rewrite single-dash long options (`-in`) into the `--in` form clap expects.
fn normalize_flag(token: &str) -> String {
    match token.strip_prefix('-') {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_alphabetic()) => {
            format!("-{}", token)
        }
        _ => token.to_string(),
    }
}

fn from_clap_error(err: clap::Error) -> CliError {
    match err.kind() {
        ErrorKind::UnknownArgument => CliError::UnknownOption(offending_option(&err)),
        ErrorKind::InvalidValue => CliError::MissingValue(offending_option(&err)),
        _ => {
            let rendered = err.to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            CliError::InvalidUsage(first_line.trim_start_matches("error: ").to_string())
        }
    }
}

fn offending_option(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg
            .trim_start_matches('-')
            .split(['=', ' '])
            .next()
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}


// Local Variables:
// rust-format-on-save: t
// End:
