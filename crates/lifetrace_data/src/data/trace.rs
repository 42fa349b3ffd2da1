use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Framing used when a generation block is written to a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceStyle {
    /// A delimiter line before every block.
    #[default]
    Plain,
    /// `<label>`, delimiter, rows, delimiter. The last block is labeled `final`.
    Labeled,
}

impl fmt::Display for TraceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStyle::Plain => write!(f, "plain"),
            TraceStyle::Labeled => write!(f, "labeled"),
        }
    }
}

impl FromStr for TraceStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(TraceStyle::Plain),
            "labeled" | "labelled" => Ok(TraceStyle::Labeled),
            other => Err(anyhow::anyhow!("unknown trace style '{other}'")),
        }
    }
}
