// SPDX-License-Identifier: GPL-3.0-or-later OR AGPL-3.0-or-later
// Copyright (C) 2025  Red Hat, Inc.

use crate::base::BaseConfiguration;
use crate::environment::Environment;
use crate::error::CliError;
use crate::parser::RawArguments;
use serde::Serialize;

/// Fully resolved IC3 run configuration.
///
/// Built once by [`Ic3Configuration::resolve`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ic3Configuration {
    #[serde(flatten)]
    base: BaseConfiguration,
    input: String,
    classpath: String,
    icc_study: Option<String>,
    db: Option<String>,
    db_host: String,
    db_local_port: u16,
    db_name: String,
    app_category: String,
    ssh: Option<String>,
    protobuf_destination: Option<String>,
    compute_components: bool,
    binary: bool,
}

impl Ic3Configuration {
    pub const DEFAULT_SSH_PROPERTIES_PATH: &str = "/db/ssh.properties";
    pub const DEFAULT_DATABASE_PROPERTIES_PATH: &str = "cc.properties";
    pub const DEFAULT_LOCAL_PORT: u16 = 3306;
    pub const DEFAULT_COMPILED_MODEL_PATH: &str = "/res/icc.cmodel";
    pub const DEFAULT_DB_NAME: &str = "dialdroid";
    pub const DEFAULT_DB_HOST_NAME: &str = "localhost";
    pub const DEFAULT_APP_CATEGORY: &str = "Default";

    /// Turn parsed arguments into the final configuration.
    ///
    /// Only a missing `in` or `cp` is an error; every other field falls back
    /// to its default. A `dbhost` option is recorded in `env`.
    pub fn resolve(raw: &RawArguments, env: &mut Environment) -> Result<Self, CliError> {
        let input = Self::required(raw, "in")?;
        let classpath = Self::required(raw, "cp")?;

        let mut base = BaseConfiguration::resolve(raw);
        if base.compiled_model().is_none() && base.model().is_none() {
            base.set_compiled_model(Self::DEFAULT_COMPILED_MODEL_PATH);
        }

        let icc_study = raw.value("iccstudy").map(str::to_string);

        let db_host = match raw.get("dbhost").value_or(Self::DEFAULT_DB_HOST_NAME) {
            Some(host) => {
                env.set_db_host(host);
                host.to_string()
            }
            None => Self::DEFAULT_DB_HOST_NAME.to_string(),
        };

        let db_local_port = match raw.value("localport") {
            Some(text) => text.trim().parse::<u16>().unwrap_or_else(|_| {
                log::warn!(
                    "Local port {} is out of range, using {}",
                    text,
                    Self::DEFAULT_LOCAL_PORT
                );
                Self::DEFAULT_LOCAL_PORT
            }),
            None => Self::DEFAULT_LOCAL_PORT,
        };

        let db_name = raw
            .value("dbname")
            .unwrap_or(Self::DEFAULT_DB_NAME)
            .to_string();
        let app_category = raw
            .value("category")
            .unwrap_or(Self::DEFAULT_APP_CATEGORY)
            .to_string();
        let protobuf_destination = raw.value("protobuf").map(str::to_string);

        let ssh = raw
            .get("ssh")
            .value_or(Self::DEFAULT_SSH_PROPERTIES_PATH)
            .map(str::to_string);
        let db = raw
            .get("db")
            .value_or(Self::DEFAULT_DATABASE_PROPERTIES_PATH)
            .map(str::to_string);

        let compute_components =
            raw.has_option("computecomponents") || db.is_some() || protobuf_destination.is_some();
        let binary = raw.has_option("binary");

        Ok(Ic3Configuration {
            base,
            input,
            classpath,
            icc_study,
            db,
            db_host,
            db_local_port,
            db_name,
            app_category,
            ssh,
            protobuf_destination,
            compute_components,
            binary,
        })
    }

    fn required(raw: &RawArguments, name: &str) -> Result<String, CliError> {
        raw.value(name)
            .map(str::to_string)
            .ok_or_else(|| CliError::MissingRequiredOption(name.to_string()))
    }

    pub fn base(&self) -> &BaseConfiguration {
        &self.base
    }

    /// Path to the .apk being analyzed
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn classpath(&self) -> &str {
        &self.classpath
    }

    pub fn icc_study(&self) -> Option<&str> {
        self.icc_study.as_deref()
    }

    /// Database properties file, set only when results go to a database
    pub fn db(&self) -> Option<&str> {
        self.db.as_deref()
    }

    pub fn db_host(&self) -> &str {
        &self.db_host
    }

    pub fn db_local_port(&self) -> u16 {
        self.db_local_port
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn app_category(&self) -> &str {
        &self.app_category
    }

    /// SSH properties file, set only when a tunnel was requested
    pub fn ssh(&self) -> Option<&str> {
        self.ssh.as_deref()
    }

    pub fn protobuf_destination(&self) -> Option<&str> {
        self.protobuf_destination.as_deref()
    }

    /// Whether to map each ICC exit point to its enclosing component
    pub fn compute_components(&self) -> bool {
        self.compute_components
    }

    pub fn binary(&self) -> bool {
        self.binary
    }
}


// Local Variables:
// rust-format-on-save: t
// End:
