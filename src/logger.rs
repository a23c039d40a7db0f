// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

pub fn log_init() {
    let env = env_logger::Env::default().filter_or("IC3_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

// Local Variables:
// rust-format-on-save: t
// End:
