//! Seed file loading.
//!
//! Two layouts are accepted, told apart by the header line:
//!
//! - `rows cols count` followed by `count` lines of `row col`, one per
//!   alive cell;
//! - `rows cols` followed by `rows` lines of `cols` binary tokens, written
//!   either contiguously (`0110`) or space separated (`0 1 1 0`).

use crate::error::{IoError, Result};
use lifetrace_core::CellGrid;
use std::fs;
use std::path::Path;

/// Layout of a seed file, as announced by its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Coordinates,
    Dense,
}

fn parse_number(token: &str, what: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| IoError::malformed_seed(format!("{what}: expected a non-negative integer, found '{token}'")))
}

/// Parses seed text into the generation-0 grid.
pub fn parse_seed(text: &str) -> Result<CellGrid> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let header = lines
        .next()
        .ok_or_else(|| IoError::malformed_seed("seed is empty"))?;
    let fields: Vec<&str> = header.split_whitespace().collect();

    let (format, rows, cols) = match fields.as_slice() {
        [rows, cols] => (
            SeedFormat::Dense,
            parse_number(rows, "row count")?,
            parse_number(cols, "column count")?,
        ),
        [rows, cols, _] => (
            SeedFormat::Coordinates,
            parse_number(rows, "row count")?,
            parse_number(cols, "column count")?,
        ),
        _ => {
            return Err(IoError::malformed_seed(format!(
                "header '{header}' must be 'rows cols' or 'rows cols count'"
            )))
        }
    };
    tracing::debug!(?format, rows, cols, "Parsing seed");

    match format {
        SeedFormat::Dense => Ok(CellGrid::with_cells(
            cols,
            rows,
            lines.map(|line| line.split_whitespace().flat_map(str::chars)),
        )?),
        SeedFormat::Coordinates => {
            let count = parse_number(fields[2], "alive cell count")?;
            let mut tokens = lines.flat_map(str::split_whitespace);
            let mut alive = Vec::new();
            for i in 0..count {
                let (row, col) = match (tokens.next(), tokens.next()) {
                    (Some(r), Some(c)) => (
                        parse_number(r, "alive cell row")?,
                        parse_number(c, "alive cell column")?,
                    ),
                    _ => {
                        return Err(IoError::malformed_seed(format!(
                            "expected {count} alive cells, found {i}"
                        )))
                    }
                };
                alive.push((row, col));
            }
            if let Some(extra) = tokens.next() {
                return Err(IoError::malformed_seed(format!(
                    "unexpected token '{extra}' after {count} alive cells"
                )));
            }
            Ok(CellGrid::from_alive_cells(cols, rows, alive)?)
        }
    }
}

/// Strips the whitespace that surrounds a path typed on stdin.
#[must_use]
pub fn clean_path(raw: &str) -> &str {
    raw.trim()
}

/// Reads and parses a seed file.
pub fn read_seed_file<P: AsRef<Path>>(path: P) -> Result<CellGrid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| IoError::from(e).with_context(format!("could not open '{}'", path.display())))?;
    parse_seed(&text).map_err(|e| e.with_context(format!("seed file '{}'", path.display())))
}
