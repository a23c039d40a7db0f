// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

use crate::config::Ic3Configuration;
use crate::environment::Environment;
use crate::error::CliError;
use crate::help;
use crate::parser::parse;
use crate::registry::OptionRegistry;
use anyhow::{Context, Result};
use std::ffi::OsString;

/// Everything one invocation writes, and the status it exits with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    fn success(stdout: String) -> Self {
        Outcome {
            status: 0,
            stdout,
            stderr: String::new(),
        }
    }

    fn failure(stderr: String, stdout: String) -> Self {
        Outcome {
            status: 1,
            stdout,
            stderr,
        }
    }

    /// Error message plus the full help text.
    fn bad_usage(registry: &OptionRegistry, err: &CliError) -> Self {
        Outcome::failure(format!("{}\n", err), help::render(registry))
    }
}

/// Convert raw process arguments, rejecting any that are not UTF-8.
pub fn utf8_args<I>(args: I) -> Result<Vec<String>, CliError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| {
                CliError::InvalidUsage(format!(
                    "argument is not valid UTF-8: {}",
                    arg.to_string_lossy()
                ))
            })
        })
        .collect()
}

/// Run the front end on `args` (without the program name).
pub fn run<I>(args: I) -> Outcome
where
    I: IntoIterator<Item = OsString>,
{
    let registry = match OptionRegistry::ic3() {
        Ok(registry) => registry,
        Err(e) => return Outcome::failure(format!("{}\n", e), String::new()),
    };

    let raw = match utf8_args(args).and_then(|argv| parse(argv, &registry)) {
        Ok(raw) => raw,
        Err(e) => return Outcome::bad_usage(&registry, &e),
    };

    if raw.has_option("help") {
        return Outcome::success(help::render(&registry));
    }

    for warning in raw.warnings() {
        log::warn!("{}", warning);
    }

    let mut env = Environment::new();
    let config = match Ic3Configuration::resolve(&raw, &mut env) {
        Ok(config) => config,
        Err(e) => return Outcome::bad_usage(&registry, &e),
    };
    if let Some(host) = env.db_host() {
        log::info!("Database host target: {}", host);
    }

    match to_yaml(&config) {
        Ok(yaml) => Outcome::success(yaml),
        Err(e) => Outcome::failure(format!("{:#}\n", e), String::new()),
    }
}

fn to_yaml(config: &Ic3Configuration) -> Result<String> {
    serde_yaml::to_string(config).context("Failed to serialize the resolved configuration")
}


// Local Variables:
// rust-format-on-save: t
// End:
