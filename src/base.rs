// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

use crate::parser::RawArguments;
use serde::Serialize;

/// Settings common to every analysis driven by the generic front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseConfiguration {
    model: Option<String>,
    compiled_model: Option<String>,
    output: Option<String>,
    thread_count: usize,
    modeled_types_only: bool,
    traverse_modeled: bool,
}

impl BaseConfiguration {
    pub const DEFAULT_THREAD_COUNT: usize = 1;

    /// Resolve the base options. Never fails: a bad thread count falls back
    /// to the default.
    pub fn resolve(raw: &RawArguments) -> Self {
        let thread_count = match raw.value("threadcount") {
            Some(text) => match text.trim().parse::<usize>() {
                Ok(count) if count > 0 => count,
                _ => {
                    log::warn!(
                        "Invalid thread count {}, using {}",
                        text,
                        Self::DEFAULT_THREAD_COUNT
                    );
                    Self::DEFAULT_THREAD_COUNT
                }
            },
            None => Self::DEFAULT_THREAD_COUNT,
        };

        BaseConfiguration {
            model: raw.value("model").map(str::to_string),
            compiled_model: raw.value("cmodel").map(str::to_string),
            output: raw.value("output").map(str::to_string),
            thread_count,
            modeled_types_only: raw.has_option("modeledtypesonly"),
            traverse_modeled: raw.has_option("traversemodeled"),
        }
    }

    pub(crate) fn set_compiled_model(&mut self, path: &str) {
        self.compiled_model = Some(path.to_string());
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn compiled_model(&self) -> Option<&str> {
        self.compiled_model.as_deref()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn modeled_types_only(&self) -> bool {
        self.modeled_types_only
    }

    pub fn traverse_modeled(&self) -> bool {
        self.traverse_modeled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::OptionValue;

    #[test]
    fn test_defaults() {
        let base = BaseConfiguration::resolve(&RawArguments::default());
        assert_eq!(base.model(), None);
        assert_eq!(base.compiled_model(), None);
        assert_eq!(base.output(), None);
        assert_eq!(base.thread_count(), BaseConfiguration::DEFAULT_THREAD_COUNT);
        assert!(!base.modeled_types_only());
        assert!(!base.traverse_modeled());
    }

    #[test]
    fn test_passthrough() {
        let raw = RawArguments::default()
            .with_value("model", OptionValue::PresentWithValue("/models".to_string()))
            .with_value("output", OptionValue::PresentWithValue("/out".to_string()))
            .with_value("threadcount", OptionValue::PresentWithValue("8".to_string()))
            .with_value("modeledtypesonly", OptionValue::PresentNoValue);
        let base = BaseConfiguration::resolve(&raw);
        assert_eq!(base.model(), Some("/models"));
        assert_eq!(base.output(), Some("/out"));
        assert_eq!(base.thread_count(), 8);
        assert!(base.modeled_types_only());
    }

    #[test]
    fn test_zero_thread_count() {
        let raw = RawArguments::default()
            .with_value("threadcount", OptionValue::PresentWithValue("0".to_string()));
        assert_eq!(BaseConfiguration::resolve(&raw).thread_count(), 1);
    }
}

// Local Variables:
// rust-format-on-save: t
// End:
