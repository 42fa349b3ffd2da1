//! Configuration management for simulation runs.
//!
//! Maps to an optional `lifetrace.toml`. Every section may be omitted;
//! missing keys fall back to the defaults below and command-line flags
//! override whatever the file says.
//!
//! ## Example `lifetrace.toml`
//!
//! ```toml
//! [simulation]
//! boundary = "toroidal"
//! rule = "B3/S23"
//! frequency = 1
//!
//! [trace]
//! style = "labeled"
//!
//! [logging]
//! level = "warn"
//! ```

use anyhow::Context;
use lifetrace_data::{BoundaryPolicy, Rule, TraceStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Default config file looked up next to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "lifetrace.toml";

/// Simulation settings (`[simulation]`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    pub boundary: BoundaryPolicy,
    pub rule: Rule,
    /// Print every `frequency`-th generation; 0 prints only the final one.
    pub frequency: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryPolicy::Toroidal,
            rule: Rule::CONWAY,
            frequency: 1,
        }
    }
}

/// Trace output settings (`[trace]`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TraceConfig {
    pub style: TraceStyle,
}

/// Logging settings (`[logging]`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Top-level configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub trace: TraceConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads `path`, or the defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content)
                .with_context(|| format!("invalid config file {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("failed to read config file {}", path.display()))
            }
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }
}
