//! Configuration loading
//!
//! Layered configuration: an optional file (TOML/YAML/JSON, whatever the
//! `config` crate recognizes) overridden by `HELPDESK_`-prefixed
//! environment variables. Only tunables live here; policy defaults are
//! defined next to the types they configure.

use crate::core::SlaPolicy;
use crate::error::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the helpdesk engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpdeskConfig {
    /// SLA first-response hours per priority
    pub sla: SlaPolicy,
}

impl HelpdeskConfig {
    /// Loads configuration from the default file name and the environment
    ///
    /// Looks for `helpdesk.{toml,yaml,json}` in the working directory; the
    /// file is optional. `HELPDESK_SLA__URGENT_HOURS=2` overrides
    /// `sla.urgent_hours`.
    pub fn load() -> Result<Self> {
        Self::from_file("helpdesk")
    }

    /// Loads configuration from a specific file stem plus the environment
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("HELPDESK").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
