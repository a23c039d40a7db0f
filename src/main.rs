// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

use ic3::app::run;
use ic3::logger::log_init;

fn main() {
    log_init();

    let outcome = run(std::env::args_os().skip(1));
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    std::process::exit(outcome.status);
}

// Local Variables:
// rust-format-on-save: t
// End:
