// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

use crate::error::CliError;
use crate::options::{BASE_OPTIONS, IC3_OPTIONS, OptionSpec, PROGRAM_NAME};
use clap::Command;

/// Ordered set of accepted options, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct OptionRegistry {
    specs: Vec<OptionSpec>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        OptionRegistry::default()
    }

    /// Registry holding the generic options followed by the IC3 ones.
    pub fn ic3() -> Result<Self, CliError> {
        let mut registry = OptionRegistry::new();
        registry.register_all(BASE_OPTIONS)?;
        registry.register_all(IC3_OPTIONS)?;
        Ok(registry)
    }

    pub fn with_options(specs: &[OptionSpec]) -> Result<Self, CliError> {
        let mut registry = OptionRegistry::new();
        registry.register_all(specs)?;
        Ok(registry)
    }

    pub fn register(&mut self, spec: OptionSpec) -> Result<(), CliError> {
        if self.get(spec.name).is_some() {
            return Err(CliError::DuplicateOption(spec.name.to_string()));
        }
        self.specs.push(spec);
        Ok(())
    }

    pub fn register_all(&mut self, specs: &[OptionSpec]) -> Result<(), CliError> {
        specs.iter().try_for_each(|spec| self.register(*spec))
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Declared options in registration order
    pub fn describe(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Build the clap command that backs both parsing and help rendering.
    pub fn command(&self) -> Command {
        Command::new(PROGRAM_NAME)
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .args(self.specs.iter().map(OptionSpec::to_arg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Arity;

    #[test]
    fn test_duplicate_registration() {
        let mut registry = OptionRegistry::new();
        registry
            .register(OptionSpec::flag("binary", "Output a binary protobuf."))
            .unwrap();
        let err = registry
            .register(OptionSpec::with_arg("binary", "Again.", "x"))
            .unwrap_err();
        assert_eq!(err, CliError::DuplicateOption("binary".to_string()));
        assert_eq!(registry.describe().len(), 1);
    }

    #[test]
    fn test_ic3_registry_order() {
        let registry = OptionRegistry::ic3().unwrap();
        let names: Vec<&str> = registry.describe().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), BASE_OPTIONS.len() + IC3_OPTIONS.len());
        assert_eq!(names[0], "model");
        assert_eq!(names[BASE_OPTIONS.len()], "in");
        assert_eq!(names[BASE_OPTIONS.len() + 1], "cp");
    }

    #[test]
    fn test_ic3_declarations() {
        let registry = OptionRegistry::ic3().unwrap();
        assert!(registry.get("in").unwrap().required);
        assert!(registry.get("cp").unwrap().required);
        assert_eq!(registry.get("db").unwrap().arity, Arity::OptionalArg);
        assert_eq!(registry.get("ssh").unwrap().arity, Arity::OptionalArg);
        assert_eq!(registry.get("localport").unwrap().arity, Arity::RequiredArg);
        assert_eq!(registry.get("binary").unwrap().arity, Arity::NoArg);
        assert!(registry.get("bogus").is_none());
    }

    #[test]
    fn test_registering_table_twice() {
        let mut registry = OptionRegistry::with_options(IC3_OPTIONS).unwrap();
        assert!(registry.register_all(IC3_OPTIONS).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        OptionRegistry::ic3().unwrap().command().debug_assert();
    }
}

// Local Variables:
// rust-format-on-save: t
// End:
