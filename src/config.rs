/*!
 * Simulator Configuration
 * Run settings layered from environment defaults and CLI overrides
 */

use crate::core::limits::{ENV_OUTPUT, ENV_POLICY, ENV_TRACE_JSON};
use crate::memory::{Policy, PolicyParseError};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How step reports are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Classic banner and block listing
    #[default]
    Text,
    /// One JSON document per step
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutput(s.to_string())),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidPolicy(#[from] PolicyParseError),

    #[error("Unknown output format '{0}'")]
    #[diagnostic(code(config::invalid_output), help("Use 'text' or 'json'."))]
    InvalidOutput(String),
}

/// Settings for one simulator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulatorConfig {
    pub policy: Policy,
    pub output: OutputFormat,
    /// Print only event headers and the final pools
    pub quiet: bool,
    /// Emit tracing events as JSON lines
    pub trace_json: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            policy: Policy::FirstFit,
            output: OutputFormat::Text,
            quiet: false,
            trace_json: false,
        }
    }
}

impl SimulatorConfig {
    /// Defaults overridden by `MMU_POLICY`, `MMU_OUTPUT` and `MMU_TRACE_JSON`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(policy) = lookup(ENV_POLICY) {
            config.policy = policy.parse()?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }
        if let Some(flag) = lookup(ENV_TRACE_JSON) {
            config.trace_json = flag == "1" || flag.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}
