// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

use crate::options::{Arity, COPYRIGHT, OptionSpec, PROGRAM_NAME};
use crate::registry::OptionRegistry;

/// One-line usage built from the registry: required options bare, the rest
/// bracketed, optional values bracketed inside them.
pub fn synopsis(registry: &OptionRegistry) -> String {
    let mut usage = PROGRAM_NAME.to_string();
    for spec in registry.describe() {
        let token = synopsis_token(spec);
        if spec.required {
            usage.push_str(&format!(" {}", token));
        } else {
            usage.push_str(&format!(" [{}]", token));
        }
    }
    usage
}

fn synopsis_token(spec: &OptionSpec) -> String {
    match spec.arity {
        Arity::NoArg => format!("-{}", spec.name),
        Arity::RequiredArg => format!("-{} <{}>", spec.name, spec.arg_name),
        Arity::OptionalArg => format!("-{} [<{}>]", spec.name, spec.arg_name),
    }
}

/// Full help text: copyright banner, synopsis, then one entry per option.
pub fn render(registry: &OptionRegistry) -> String {
    let mut command = registry
        .command()
        .before_help(COPYRIGHT)
        .override_usage(synopsis(registry));
    command.render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synopsis() {
        let registry = OptionRegistry::ic3().unwrap();
        let usage = synopsis(&registry);
        assert!(usage.starts_with("ic3 "));
        assert!(usage.contains(" -in <.apk path> -cp <android platform path> "));
        assert!(usage.contains(" [-db [<DB properties file>]] "));
        assert!(usage.contains(" [-localport <local DB port>] "));
        assert!(usage.contains(" [-computecomponents] "));
        assert!(usage.ends_with(" [-binary]"));
    }

    #[test]
    fn test_synopsis_follows_registry() {
        let mut registry = OptionRegistry::new();
        registry
            .register(OptionSpec::with_arg("sample", "Sample name.", "sample name").required())
            .unwrap();
        assert_eq!(synopsis(&registry), "ic3 -sample <sample name>");
    }

    #[test]
    fn test_render() {
        let registry = OptionRegistry::ic3().unwrap();
        let text = render(&registry);
        assert!(text.starts_with("Copyright (C) 2015 The Pennsylvania State University"));
        assert!(text.contains(&synopsis(&registry)));
        assert!(text.contains("Store entry points to database."));
        assert!(text.contains("Output a binary protobuf."));
    }
}

// Local Variables:
// rust-format-on-save: t
// End:
