use clap::Parser;
use lifetrace_core::config::DEFAULT_CONFIG_PATH;
use lifetrace_data::{BoundaryPolicy, Rule, TraceStyle};

/// Game of Life simulator that prints a trace of every displayed generation.
///
/// With only `<GENERATIONS> [FREQUENCY]` the seed file path is read from
/// standard input. Passing `<RNG_SEED> <ROWS> <COLS>` as well starts from a
/// random grid instead.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of generations to simulate
    #[arg(allow_negative_numbers = true)]
    pub generations: i64,

    /// Print every N-th generation (0 prints only the final one)
    pub frequency: Option<u32>,

    /// Seed for a random initial grid
    #[arg(requires = "rows")]
    pub rng_seed: Option<u64>,

    /// Rows of the random grid
    #[arg(requires = "cols")]
    pub rows: Option<usize>,

    /// Columns of the random grid
    pub cols: Option<usize>,

    /// Edge behavior for neighbor lookups
    #[arg(short, long)]
    pub boundary: Option<BoundaryPolicy>,

    /// Trace framing
    #[arg(short, long)]
    pub style: Option<TraceStyle>,

    /// Birth/survival rule, e.g. B3/S23
    #[arg(short, long)]
    pub rule: Option<Rule>,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Log filter (overrides the config file; RUST_LOG overrides both)
    #[arg(long)]
    pub log_level: Option<String>,
}
