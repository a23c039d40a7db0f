// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

/// Process-wide settings shared with the database layer.
///
/// Written by the configuration resolver before any downstream component
/// reads it. Tests use a fresh instance or call [`Environment::reset`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    db_host: Option<String>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn set_db_host(&mut self, host: &str) {
        if let Some(previous) = &self.db_host {
            log::warn!("Database host already set to {}, replacing with {}", previous, host);
        }
        log::debug!("Database host: {}", host);
        self.db_host = Some(host.to_string());
    }

    /// The database host target, if one was requested on the command line
    pub fn db_host(&self) -> Option<&str> {
        self.db_host.as_deref()
    }

    pub fn reset(&mut self) {
        self.db_host = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let mut env = Environment::new();
        assert_eq!(env.db_host(), None);
        env.set_db_host("10.0.0.5");
        assert_eq!(env.db_host(), Some("10.0.0.5"));
        env.reset();
        assert_eq!(env, Environment::default());
    }
}

// Local Variables:
// rust-format-on-save: t
// End:
