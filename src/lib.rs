// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

pub mod app;
pub mod base;
pub mod config;
pub mod environment;
pub mod error;
pub mod help;
pub mod logger;
pub mod options;
pub mod parser;
pub mod registry;

// Local Variables:
// rust-format-on-save: t
// End:
