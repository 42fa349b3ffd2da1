use anyhow::Result;
use clap::Parser;
use lifetrace_core::config::AppConfig;
use lifetrace_lib::app::{self, Args};
use std::io;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(&args.config)?;
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    lifetrace_core::init_logging(level);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());
    let mut prompt = io::stderr();

    let summary = app::execute(&args, &config, &mut input, out, &mut prompt)?;
    tracing::debug!(
        generations = summary.generations,
        blocks = summary.blocks,
        "Trace written"
    );
    Ok(())
}
