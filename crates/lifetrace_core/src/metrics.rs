//! Run statistics and logging setup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters collected while generations are produced.
pub struct Metrics {
    generations: AtomicU64,
    population: AtomicU64,
    peak_population: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: AtomicU64::new(0),
            population: AtomicU64::new(0),
            peak_population: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records one produced generation.
    pub fn record_generation(&self, index: u64, population: usize) {
        self.generations.fetch_add(1, Ordering::Relaxed);
        self.population.store(population as u64, Ordering::Relaxed);
        self.peak_population
            .fetch_max(population as u64, Ordering::Relaxed);

        if index > 0 && index.is_multiple_of(1000) {
            tracing::info!(generation = index, population, "Simulation progress");
        }
    }

    /// Gets the number of generations recorded.
    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    /// Live cells in the most recent generation.
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    /// Gets the largest population seen.
    #[must_use]
    pub fn peak_population(&self) -> u64 {
        self.peak_population.load(Ordering::Relaxed)
    }

    /// Time since the collector was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a run summary at info level.
    pub fn log_summary(&self) {
        tracing::info!(
            generations = self.generations(),
            final_population = self.population(),
            peak_population = self.peak_population(),
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Simulation finished"
        );
    }
}

/// Installs a stderr `tracing` subscriber. `RUST_LOG` overrides `level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
