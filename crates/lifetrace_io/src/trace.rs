//! Generation snapshots as text.
//!
//! A generation block is one line per grid row, each row written as a
//! `0`/`1` string with column 0 first, so the row reads as a base-2 integer
//! whose most significant bit is column 0. Blocks are framed by lines of
//! exactly 20 dashes:
//!
//! ```text
//! --------------------      plain: a delimiter before every block
//! 01100
//! 11011
//! --------------------
//! 01110
//! ...
//! ```
//!
//! The labeled style writes `<index>` (or `final`), a delimiter, the rows and
//! a closing delimiter, so a reader splitting on delimiters finds the blocks
//! at the odd-indexed chunks.

use crate::error::{IoError, Result};
use lifetrace_core::{CellGrid, Generation, Generations, Metrics};
use lifetrace_data::TraceStyle;
use serde::Serialize;
use std::io::Write;

/// Block separator: exactly 20 dashes.
pub const DELIMITER: &str = "--------------------";

/// Label of the last block in a labeled trace.
pub const FINAL_LABEL: &str = "final";

/// Encodes one grid as newline-terminated rows.
#[must_use]
pub fn encode_grid(grid: &CellGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|c| c.as_char()));
        out.push('\n');
    }
    out
}

/// Encodes one generation block (rows only, no framing).
#[must_use]
pub fn encode(generation: &Generation) -> String {
    encode_grid(&generation.grid)
}

/// Streams generation blocks to a writer, applying framing and sampling.
pub struct TraceWriter<W: Write> {
    out: W,
    style: TraceStyle,
    frequency: u32,
    final_index: u64,
    blocks_written: usize,
}

impl<W: Write> TraceWriter<W> {
    /// `frequency` selects which generations before `final_index` are written:
    /// every `frequency`-th one, or none when it is 0. The final generation is
    /// always written.
    pub fn new(out: W, style: TraceStyle, frequency: u32, final_index: u64) -> Self {
        Self {
            out,
            style,
            frequency,
            final_index,
            blocks_written: 0,
        }
    }

    /// Whether generation `index` is written under the sampling rule.
    #[must_use]
    pub fn should_emit(&self, index: u64) -> bool {
        index == self.final_index
            || (index < self.final_index
                && self.frequency > 0
                && index.is_multiple_of(u64::from(self.frequency)))
    }

    /// Writes `generation` if it is selected. Returns whether a block was written.
    pub fn write_generation(&mut self, generation: &Generation) -> Result<bool> {
        if !self.should_emit(generation.index) {
            return Ok(false);
        }
        let rows = encode(generation);
        match self.style {
            TraceStyle::Plain => {
                writeln!(self.out, "{DELIMITER}")?;
                self.out.write_all(rows.as_bytes())?;
            }
            TraceStyle::Labeled => {
                if generation.index == self.final_index {
                    writeln!(self.out, "{FINAL_LABEL}")?;
                } else {
                    writeln!(self.out, "{}", generation.index)?;
                }
                writeln!(self.out, "{DELIMITER}")?;
                self.out.write_all(rows.as_bytes())?;
                writeln!(self.out, "{DELIMITER}")?;
            }
        }
        self.blocks_written += 1;
        Ok(true)
    }

    /// Gets the number of blocks written so far.
    #[must_use]
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Drives `generations` through a [`TraceWriter`], one generation at a time.
///
/// Returns the number of blocks written.
pub fn write_trace<W: Write>(
    out: W,
    generations: Generations,
    style: TraceStyle,
    frequency: u32,
    metrics: Option<&Metrics>,
) -> Result<usize> {
    let mut writer = TraceWriter::new(out, style, frequency, generations.final_index());
    for generation in generations {
        if let Some(metrics) = metrics {
            metrics.record_generation(generation.index, generation.grid.population());
        }
        writer.write_generation(&generation)?;
    }
    let blocks = writer.blocks_written();
    writer.finish()?;
    Ok(blocks)
}

/// Renders a whole trace into a string.
pub fn render_trace(generations: Generations, style: TraceStyle, frequency: u32) -> Result<String> {
    let mut buf = Vec::new();
    write_trace(&mut buf, generations, style, frequency, None)?;
    String::from_utf8(buf).map_err(|e| IoError::trace(e.to_string()))
}

fn split_chunks(text: &str) -> Vec<Vec<&str>> {
    let mut chunks = vec![Vec::new()];
    for line in text.lines() {
        if line.trim_end() == DELIMITER {
            chunks.push(Vec::new());
        } else if let Some(chunk) = chunks.last_mut() {
            chunk.push(line);
        }
    }
    chunks
}

fn parse_block(lines: &[&str], block: usize) -> Result<CellGrid> {
    let rows: Vec<String> = lines
        .iter()
        .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|l| !l.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(IoError::trace(format!("block {block} has no rows")));
    }
    CellGrid::from_rows(&rows).map_err(|e| IoError::from(e).with_context(format!("trace block {block}")))
}

/// Parses a trace back into its generation grids.
///
/// Spaces inside rows are ignored, so traces printed as `0 1 1 0` also parse.
pub fn parse_trace(text: &str, style: TraceStyle) -> Result<Vec<CellGrid>> {
    let chunks = split_chunks(text);
    match style {
        TraceStyle::Plain => {
            if chunks[0].iter().any(|l| !l.trim().is_empty()) {
                return Err(IoError::trace("text found before the first delimiter"));
            }
            chunks[1..]
                .iter()
                .enumerate()
                .map(|(i, lines)| parse_block(lines, i))
                .collect()
        }
        TraceStyle::Labeled => chunks
            .iter()
            .skip(1)
            .step_by(2)
            .enumerate()
            .map(|(i, lines)| parse_block(lines, i))
            .collect(),
    }
}

/// Reads a row string as the base-2 integer it spells.
pub fn row_value(row: &str) -> Result<u128> {
    let row = row.trim();
    if row.is_empty() || row.len() > 128 {
        return Err(IoError::trace(format!(
            "row of length {} cannot be read as a 128-bit integer",
            row.len()
        )));
    }
    u128::from_str_radix(row, 2).map_err(|_| IoError::trace(format!("'{row}' is not a binary row")))
}

/// Integer view of every row of `grid`.
pub fn row_values(grid: &CellGrid) -> Result<Vec<u128>> {
    (0..grid.height())
        .map(|r| row_value(&grid.row_string(r)?))
        .collect()
}

/// Per-block summary used by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockStats {
    pub block: usize,
    pub width: usize,
    pub height: usize,
    pub population: usize,
}

/// Summarizes each parsed block.
#[must_use]
pub fn block_stats(grids: &[CellGrid]) -> Vec<BlockStats> {
    grids
        .iter()
        .enumerate()
        .map(|(block, grid)| BlockStats {
            block,
            width: grid.width(),
            height: grid.height(),
            population: grid.population(),
        })
        .collect()
}

/// One block that differs between two traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMismatch {
    pub block: usize,
    pub expected: String,
    pub actual: String,
}

/// Outcome of comparing an actual trace with an expected one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceComparison {
    pub expected_blocks: usize,
    pub actual_blocks: usize,
    pub mismatches: Vec<BlockMismatch>,
}

impl TraceComparison {
    /// True when every block matches and the block counts agree.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty() && self.expected_blocks == self.actual_blocks
    }
}

/// Compares two traces block by block.
pub fn compare_traces(expected: &[CellGrid], actual: &[CellGrid]) -> TraceComparison {
    let mismatches = expected
        .iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (e, a))| e != a)
        .map(|(block, (e, a))| BlockMismatch {
            block,
            expected: e.to_string(),
            actual: a.to_string(),
        })
        .collect();
    TraceComparison {
        expected_blocks: expected.len(),
        actual_blocks: actual.len(),
        mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifetrace_core::simulator;
    use lifetrace_data::BoundaryPolicy;
    use std::sync::Arc;

    fn dead_run(n: i64) -> Generations {
        simulator::run(CellGrid::dead(3, 3).unwrap(), n, BoundaryPolicy::Bounded).unwrap()
    }

    #[test]
    fn test_encode_rows() {
        let grid = CellGrid::from_rows(&["01100", "11011"]).unwrap();
        let generation = Generation {
            index: 0,
            grid: Arc::new(grid),
        };
        assert_eq!(encode(&generation), "01100\n11011\n");
    }

    #[test]
    fn test_plain_single_block_framing() {
        let seed = CellGrid::from_rows(&["01100", "11011"]).unwrap();
        let gens = simulator::run(seed, 0, BoundaryPolicy::Bounded).unwrap();
        let text = render_trace(gens, TraceStyle::Plain, 1).unwrap();
        assert_eq!(text, format!("{DELIMITER}\n01100\n11011\n"));
        let values: Vec<u128> = text.lines().skip(1).map(|l| row_value(l).unwrap()).collect();
        assert_eq!(values, vec![12, 27]);
    }

    #[test]
    fn test_plain_three_dead_blocks() {
        let text = render_trace(dead_run(2), TraceStyle::Plain, 1).unwrap();
        assert_eq!(DELIMITER.len(), 20);
        assert_eq!(text.lines().filter(|l| *l == DELIMITER).count(), 3);
        let rows: Vec<&str> = text.lines().filter(|l| *l != DELIMITER).collect();
        assert_eq!(rows, vec!["000"; 9]);
        assert!(!text.trim_end().ends_with(DELIMITER));
    }

    #[test]
    fn test_labeled_framing() {
        let text = render_trace(dead_run(1), TraceStyle::Labeled, 1).unwrap();
        let expected = format!("0\n{DELIMITER}\n000\n000\n000\n{DELIMITER}\nfinal\n{DELIMITER}\n000\n000\n000\n{DELIMITER}\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_frequency_sampling() {
        let text = render_trace(dead_run(5), TraceStyle::Labeled, 2).unwrap();
        let labels: Vec<&str> = text
            .lines()
            .filter(|l| !l.starts_with('-') && l.len() != 3)
            .collect();
        assert_eq!(labels, vec!["0", "2", "4", "final"]);

        let only_final = render_trace(dead_run(5), TraceStyle::Plain, 0).unwrap();
        assert_eq!(only_final.lines().filter(|l| *l == DELIMITER).count(), 1);
    }

    #[test]
    fn test_parse_both_styles() {
        let seed = CellGrid::from_rows(&["00000", "00100", "00100", "00100", "00000"]).unwrap();
        let gens = simulator::run(seed, 3, BoundaryPolicy::Toroidal).unwrap();
        let expected: Vec<CellGrid> = gens.restart().map(|g| (*g.grid).clone()).collect();
        for style in [TraceStyle::Plain, TraceStyle::Labeled] {
            let text = render_trace(gens.restart(), style, 1).unwrap();
            assert_eq!(parse_trace(&text, style).unwrap(), expected, "style {style}");
        }
    }

    #[test]
    fn test_parse_spaced_rows() {
        let text = format!("0\n{DELIMITER}\n0 1 0 \n1 1 1 \n{DELIMITER}\n");
        let grids = parse_trace(&text, TraceStyle::Labeled).unwrap();
        assert_eq!(row_values(&grids[0]).unwrap(), vec![2, 7]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_trace("hello\n", TraceStyle::Plain).is_err());
        let text = format!("{DELIMITER}\n0120\n");
        assert!(parse_trace(&text, TraceStyle::Plain).unwrap_err().is_malformed_seed());
        let text = format!("{DELIMITER}\n{DELIMITER}\n01\n");
        assert!(parse_trace(&text, TraceStyle::Plain).is_err());
    }

    #[test]
    fn test_row_value_limits() {
        assert_eq!(row_value("01100").unwrap(), 12);
        assert_eq!(row_value("11011").unwrap(), 27);
        assert!(row_value("").is_err());
        assert!(row_value(&"1".repeat(129)).is_err());
        assert!(row_value("10a").is_err());
    }

    #[test]
    fn test_compare_traces() {
        let a = CellGrid::from_rows(&["01", "10"]).unwrap();
        let b = CellGrid::from_rows(&["11", "10"]).unwrap();
        let same = compare_traces(&[a.clone(), b.clone()], &[a.clone(), b.clone()]);
        assert!(same.passed());

        let diff = compare_traces(&[a.clone(), b.clone()], &[a.clone(), a.clone()]);
        assert!(!diff.passed());
        assert_eq!(diff.mismatches[0].block, 1);

        let short = compare_traces(&[a.clone(), b], &[a]);
        assert!(short.mismatches.is_empty());
        assert!(!short.passed());
    }

    #[test]
    fn test_metrics_recorded_while_streaming() {
        let metrics = Metrics::new();
        let blocks = write_trace(Vec::new(), dead_run(4), TraceStyle::Plain, 2, Some(&metrics)).unwrap();
        assert_eq!(blocks, 3);
        assert_eq!(metrics.generations(), 5);
    }

    #[test]
    fn test_block_stats() {
        let grids = vec![CellGrid::from_rows(&["11", "01"]).unwrap()];
        let stats = block_stats(&grids);
        assert_eq!(stats[0].population, 3);
        assert_eq!(stats[0].width, 2);
    }
}
