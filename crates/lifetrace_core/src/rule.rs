//! Transition rule: one pure generation step.
//!
//! The next grid is written into a freshly allocated buffer while the input
//! grid is only read, so no cell ever observes an already-updated neighbor.

use crate::grid::CellGrid;
use lifetrace_data::{BoundaryPolicy, Cell, Rule};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Moore neighborhood as (row, col) offsets.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grids shorter than this are stepped on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_ROW_THRESHOLD: usize = 64;

/// Counts alive cells among the 8 neighbors of `(row, col)`.
///
/// Off-grid neighbors on a bounded grid count as dead. On a toroidal grid each
/// of the 8 positions is wrapped, even when two positions land on the same cell.
#[must_use]
pub fn live_neighbors(grid: &CellGrid, row: usize, col: usize, boundary: BoundaryPolicy) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let r = boundary.resolve(row, dr, grid.height());
        let c = boundary.resolve(col, dc, grid.width());
        if let (Some(r), Some(c)) = (r, c) {
            if grid.cell(r, c).is_alive() {
                count += 1;
            }
        }
    }
    count
}

/// Applies a [`Rule`] to whole grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleEngine {
    rule: Rule,
}

impl RuleEngine {
    /// Creates an engine for `rule`.
    #[must_use]
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    /// The rule this engine applies.
    #[must_use]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    fn fill_row(&self, grid: &CellGrid, boundary: BoundaryPolicy, row: usize, out: &mut [Cell]) {
        for (col, slot) in out.iter_mut().enumerate() {
            let alive = grid.cell(row, col).is_alive();
            let neighbors = live_neighbors(grid, row, col, boundary);
            *slot = Cell::from(self.rule.next(alive, neighbors));
        }
    }

    /// Computes the next generation on the calling thread.
    #[must_use]
    pub fn step_serial(&self, grid: &CellGrid, boundary: BoundaryPolicy) -> CellGrid {
        let width = grid.width();
        let mut next = vec![Cell::Dead; width * grid.height()];
        for (row, out) in next.chunks_mut(width).enumerate() {
            self.fill_row(grid, boundary, row, out);
        }
        CellGrid::from_parts(width, grid.height(), next)
    }

    /// Computes the next generation, spreading rows across the rayon pool.
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn step_parallel(&self, grid: &CellGrid, boundary: BoundaryPolicy) -> CellGrid {
        let width = grid.width();
        let mut next = vec![Cell::Dead; width * grid.height()];
        next.par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| self.fill_row(grid, boundary, row, out));
        CellGrid::from_parts(width, grid.height(), next)
    }

    /// Computes the next generation. Never mutates `grid`.
    #[must_use]
    pub fn step(&self, grid: &CellGrid, boundary: BoundaryPolicy) -> CellGrid {
        #[cfg(feature = "parallel")]
        {
            if grid.height() >= PARALLEL_ROW_THRESHOLD {
                return self.step_parallel(grid, boundary);
            }
        }
        self.step_serial(grid, boundary)
    }
}

/// One B3/S23 step.
#[must_use]
pub fn step(grid: &CellGrid, boundary: BoundaryPolicy) -> CellGrid {
    RuleEngine::default().step(grid, boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> CellGrid {
        CellGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_birth_with_exactly_three() {
        let g = grid(&["110", "100", "000"]);
        let next = step(&g, BoundaryPolicy::Bounded);
        assert_eq!(next.get(1, 1).unwrap(), Cell::Alive);
    }

    #[test]
    fn test_no_birth_with_two_or_four() {
        let two = grid(&["100", "000", "001"]);
        assert_eq!(live_neighbors(&two, 1, 1, BoundaryPolicy::Bounded), 2);
        assert_eq!(step(&two, BoundaryPolicy::Bounded).get(1, 1).unwrap(), Cell::Dead);

        let four = grid(&["101", "000", "101"]);
        assert_eq!(live_neighbors(&four, 1, 1, BoundaryPolicy::Bounded), 4);
        assert_eq!(step(&four, BoundaryPolicy::Bounded).get(1, 1).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_survival_and_death() {
        // Center alive with 2, 3, 1 and 4 neighbors respectively.
        let cases = [
            (["100", "010", "001"], Cell::Alive),
            (["101", "010", "001"], Cell::Alive),
            (["100", "010", "000"], Cell::Dead),
            (["101", "010", "101"], Cell::Dead),
            (["000", "010", "000"], Cell::Dead),
        ];
        for (rows, expected) in cases {
            let next = step(&grid(&rows), BoundaryPolicy::Bounded);
            assert_eq!(next.get(1, 1).unwrap(), expected, "rows {rows:?}");
        }
    }

    #[test]
    fn test_toroidal_counts_across_edges() {
        let g = grid(&["1001", "0000", "0000", "1001"]);
        assert_eq!(live_neighbors(&g, 0, 0, BoundaryPolicy::Bounded), 0);
        assert_eq!(live_neighbors(&g, 0, 0, BoundaryPolicy::Toroidal), 3);
    }

    #[test]
    fn test_single_cell_torus_sees_itself_eight_times() {
        let g = grid(&["1"]);
        assert_eq!(live_neighbors(&g, 0, 0, BoundaryPolicy::Toroidal), 8);
        assert_eq!(live_neighbors(&g, 0, 0, BoundaryPolicy::Bounded), 0);
        assert_eq!(step(&g, BoundaryPolicy::Toroidal).population(), 0);
    }

    #[test]
    fn test_input_grid_is_untouched() {
        let g = grid(&["000", "111", "000"]);
        let before = g.clone();
        let next = step(&g, BoundaryPolicy::Bounded);
        assert_eq!(g, before);
        assert_eq!(next.to_string(), "010\n010\n010");
    }

    #[test]
    fn test_custom_rule() {
        // B36/S23 gives birth on six neighbors.
        let engine = RuleEngine::new("B36/S23".parse().unwrap());
        let g = grid(&["111", "101", "000"]);
        assert_eq!(live_neighbors(&g, 1, 1, BoundaryPolicy::Bounded), 5);
        let g = grid(&["111", "101", "100"]);
        let next = engine.step(&g, BoundaryPolicy::Bounded);
        assert_eq!(next.get(1, 1).unwrap(), Cell::Alive);
        assert_eq!(step(&g, BoundaryPolicy::Bounded).get(1, 1).unwrap(), Cell::Dead);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let g = CellGrid::random_seeded(80, 96, 7).unwrap();
        let engine = RuleEngine::default();
        for boundary in [BoundaryPolicy::Bounded, BoundaryPolicy::Toroidal] {
            assert_eq!(
                engine.step_parallel(&g, boundary),
                engine.step_serial(&g, boundary)
            );
        }
    }
}
