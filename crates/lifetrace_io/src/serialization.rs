//! JSON helpers with lifetrace error handling.

use crate::error::{IoError, Result};
use serde::Serialize;
use std::io::Write;

/// Serializes data to a single-line JSON string.
pub fn to_json<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string(data)?)
}

/// Serializes data to pretty-printed JSON.
pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(data)?)
}

/// Writes one JSON document per line.
pub fn write_json_lines<W, T>(mut out: W, items: &[T]) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    for item in items {
        let line = to_json(item).map_err(|e| e.with_context("serializing JSON line"))?;
        writeln!(out, "{line}").map_err(IoError::from)?;
    }
    out.flush()?;
    Ok(())
}
