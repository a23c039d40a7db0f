// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

// This file is also pulled into build.rs with include!, so it must stay
// free of crate-local paths.

use clap::{Arg, ArgAction};

pub const PROGRAM_NAME: &str = "ic3";

pub const COPYRIGHT: &str = "Copyright (C) 2015 The Pennsylvania State University and the University of Wisconsin\n\
     Systems and Internet Infrastructure Security Laboratory\n";

/// How many values an option takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    NoArg,
    RequiredArg,
    OptionalArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
}

/// Declaration of a single command-line option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Placeholder shown for the value in help output
    pub arg_name: &'static str,
    pub arity: Arity,
    pub kind: ValueKind,
    pub required: bool,
}

impl OptionSpec {
    pub const fn flag(name: &'static str, description: &'static str) -> Self {
        OptionSpec {
            name,
            description,
            arg_name: "",
            arity: Arity::NoArg,
            kind: ValueKind::String,
            required: false,
        }
    }

    pub const fn with_arg(
        name: &'static str,
        description: &'static str,
        arg_name: &'static str,
    ) -> Self {
        OptionSpec {
            name,
            description,
            arg_name,
            arity: Arity::RequiredArg,
            kind: ValueKind::String,
            required: false,
        }
    }

    pub const fn optional_arg(mut self) -> Self {
        self.arity = Arity::OptionalArg;
        self
    }

    pub const fn number(mut self) -> Self {
        self.kind = ValueKind::Number;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Lower the declaration into a clap argument.
    ///
    /// Required options are not marked on the clap side; the parser checks
    /// them after matching.
    pub fn to_arg(&self) -> Arg {
        let arg = Arg::new(self.name).long(self.name).help(self.description);
        let arg = match self.arity {
            Arity::NoArg => arg.action(ArgAction::SetTrue),
            Arity::RequiredArg => arg
                .action(ArgAction::Set)
                .num_args(1)
                .value_name(self.arg_name),
            Arity::OptionalArg => arg
                .action(ArgAction::Set)
                .num_args(0..=1)
                .value_name(self.arg_name),
        };
        // `-localport -5` must reach the numeric check, not look like a flag
        match self.kind {
            ValueKind::Number => arg.allow_negative_numbers(true),
            ValueKind::String => arg,
        }
    }
}

/// Options shared by every analysis built on the generic front end.
pub const BASE_OPTIONS: &[OptionSpec] = &[
    OptionSpec::with_arg("model", "Path to the model directory.", "model directory"),
    OptionSpec::with_arg("cmodel", "Path to the compiled model.", "compiled model path"),
    OptionSpec::with_arg("output", "Output directory.", "output directory"),
    OptionSpec::with_arg("threadcount", "Number of analysis threads.", "thread count").number(),
    OptionSpec::flag("modeledtypesonly", "Only infer values for modeled types."),
    OptionSpec::flag("traversemodeled", "Propagate through modeled classes."),
    OptionSpec::flag("help", "Print this help message."),
];

pub const IC3_OPTIONS: &[OptionSpec] = &[
    OptionSpec::with_arg("in", "Path to the .apk of the application.", ".apk path").required(),
    OptionSpec::with_arg("cp", "Path to android platforms", "android platform path").required(),
    OptionSpec::with_arg("db", "Store entry points to database.", "DB properties file")
        .optional_arg(),
    OptionSpec::with_arg("ssh", "Use SSH to connect to the database.", "SSH properties file")
        .optional_arg(),
    OptionSpec::with_arg("localport", "Local DB port to connect to.", "local DB port").number(),
    OptionSpec::with_arg("protobuf", "Destination path for the results.", "destination path"),
    OptionSpec::with_arg("dbhost", "DB host to connect to.", "DB host").optional_arg(),
    OptionSpec::with_arg("category", "Category of the application", "app category"),
    OptionSpec::with_arg("dbname", "DB name.", "DB name"),
    OptionSpec::with_arg("iccstudy", "Identifier of the ICC study.", "study id"),
    OptionSpec::flag(
        "computecomponents",
        "Compute which components each exit point belongs to.",
    ),
    OptionSpec::flag("binary", "Output a binary protobuf."),
];

// Local Variables:
// rust-format-on-save: t
// End:
