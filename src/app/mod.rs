//! Command-line driver: resolves settings, loads the seed, streams the trace.

pub mod cli;

pub use cli::Args;

use anyhow::{Context, Result};
use lifetrace_core::config::AppConfig;
use lifetrace_core::simulator::{validate_generations, Simulator};
use lifetrace_core::{CellGrid, Metrics};
use lifetrace_data::{BoundaryPolicy, Rule, TraceStyle};
use lifetrace_io::{clean_path, read_seed_file, write_trace};
use std::io::{BufRead, Write};

/// Prompt written before the seed path is read from stdin.
pub const PATH_PROMPT: &str = "File path: ";

/// Effective run settings after layering CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub boundary: BoundaryPolicy,
    pub rule: Rule,
    pub frequency: u32,
    pub style: TraceStyle,
}

impl Settings {
    /// Layers CLI flags over the config file.
    #[must_use]
    pub fn resolve(args: &Args, config: &AppConfig) -> Self {
        Self {
            boundary: args.boundary.unwrap_or(config.simulation.boundary),
            rule: args.rule.unwrap_or(config.simulation.rule),
            frequency: args.frequency.unwrap_or(config.simulation.frequency),
            style: args.style.unwrap_or(config.trace.style),
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub blocks: usize,
}

/// Loads the generation-0 grid: random when an RNG seed is given, otherwise
/// from the file whose path is read from `input`.
pub fn load_seed<R: BufRead, E: Write>(args: &Args, input: &mut R, prompt: &mut E) -> Result<CellGrid> {
    if let (Some(seed), Some(rows), Some(cols)) = (args.rng_seed, args.rows, args.cols) {
        tracing::info!(seed, rows, cols, "Using random seed grid");
        return Ok(CellGrid::random_seeded(cols, rows, seed)?);
    }

    write!(prompt, "{PATH_PROMPT}")?;
    prompt.flush()?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read seed path from stdin")?;
    let path = clean_path(&line);
    if path.is_empty() {
        anyhow::bail!("no seed file path given on stdin");
    }
    tracing::info!(path, "Loading seed file");
    Ok(read_seed_file(path)?)
}

/// Runs one simulation and writes its trace to `out`.
///
/// Nothing is written to `out` unless the generation count is valid and the
/// seed loaded cleanly.
pub fn execute<R, W, E>(
    args: &Args,
    config: &AppConfig,
    input: &mut R,
    out: W,
    prompt: &mut E,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let settings = Settings::resolve(args, config);
    tracing::debug!(?settings, "Resolved settings");

    let generations = validate_generations(args.generations)?;
    let seed = load_seed(args, input, prompt)?;

    let run = Simulator::new(settings.rule).run(seed, args.generations, settings.boundary)?;
    let metrics = Metrics::new();
    let blocks = write_trace(out, run, settings.style, settings.frequency, Some(&metrics))
        .context("failed to write trace")?;
    metrics.log_summary();

    Ok(RunSummary {
        generations,
        blocks,
    })
}
