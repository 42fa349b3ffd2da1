//! Multi-generation driver over the rule engine.

use crate::error::{GridError, Result};
use crate::grid::CellGrid;
use crate::rule::RuleEngine;
use lifetrace_data::{BoundaryPolicy, Rule};
use serde::Serialize;
use std::iter::FusedIterator;
use std::sync::Arc;

/// One grid snapshot and its step index. Index 0 is the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub index: u64,
    pub grid: Arc<CellGrid>,
}

/// Runs a seed forward under a fixed rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    engine: RuleEngine,
}

impl Simulator {
    /// Creates a simulator for `rule`.
    #[must_use]
    pub fn new(rule: Rule) -> Self {
        Self {
            engine: RuleEngine::new(rule),
        }
    }

    /// Lazily produces `generations + 1` entries starting with the unmodified seed.
    ///
    /// Fails with [`GridError::InvalidGenerationCount`] before stepping anything
    /// when `generations` is negative.
    pub fn run(
        &self,
        seed: CellGrid,
        generations: i64,
        boundary: BoundaryPolicy,
    ) -> Result<Generations> {
        let last = validate_generations(generations)?;
        tracing::debug!(
            width = seed.width(),
            height = seed.height(),
            generations = last,
            boundary = %boundary,
            rule = %self.engine.rule(),
            "Starting simulation"
        );
        Ok(Generations {
            engine: self.engine,
            boundary,
            seed: Arc::new(seed),
            current: None,
            next_index: 0,
            last,
        })
    }
}

/// Converts a requested generation count, rejecting negative values.
pub fn validate_generations(generations: i64) -> Result<u64> {
    u64::try_from(generations).map_err(|_| GridError::InvalidGenerationCount(generations))
}

/// [`Simulator::run`] with the B3/S23 rule.
pub fn run(seed: CellGrid, generations: i64, boundary: BoundaryPolicy) -> Result<Generations> {
    Simulator::default().run(seed, generations, boundary)
}

/// Lazy, finite sequence of generations.
///
/// Cloning before consumption (or calling [`Generations::restart`]) replays
/// the run from the seed.
#[derive(Debug, Clone)]
pub struct Generations {
    engine: RuleEngine,
    boundary: BoundaryPolicy,
    seed: Arc<CellGrid>,
    current: Option<Arc<CellGrid>>,
    next_index: u64,
    last: u64,
}

impl Generations {
    /// Index of the final generation.
    #[must_use]
    pub fn final_index(&self) -> u64 {
        self.last
    }

    /// Edge handling used for every step.
    #[must_use]
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// The generation-0 grid.
    #[must_use]
    pub fn seed(&self) -> &CellGrid {
        &self.seed
    }

    /// A fresh sequence starting again at generation 0.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self {
            current: None,
            next_index: 0,
            ..self.clone()
        }
    }

    /// Materializes the remaining generations.
    #[must_use]
    pub fn collect_history(self) -> Vec<Generation> {
        self.collect()
    }
}

impl Iterator for Generations {
    type Item = Generation;

    fn next(&mut self) -> Option<Generation> {
        if self.next_index > self.last {
            return None;
        }
        let grid = match &self.current {
            None => Arc::clone(&self.seed),
            Some(prev) => Arc::new(self.engine.step(prev, self.boundary)),
        };
        tracing::trace!(
            generation = self.next_index,
            population = grid.population(),
            "Generation computed"
        );
        self.current = Some(Arc::clone(&grid));
        let generation = Generation {
            index: self.next_index,
            grid,
        };
        self.next_index += 1;
        Some(generation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1).saturating_sub(self.next_index);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Generations {}

impl FusedIterator for Generations {}
