//! Fixed-size, immutable grid of binary cells.

use crate::error::{GridError, Result};
use lifetrace_data::Cell;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;

/// A value that can stand for one cell when building a grid.
pub trait CellToken: fmt::Debug {
    /// `None` when the value is not a binary token.
    fn to_cell(&self) -> Option<Cell>;
}

impl CellToken for Cell {
    fn to_cell(&self) -> Option<Cell> {
        Some(*self)
    }
}

impl CellToken for bool {
    fn to_cell(&self) -> Option<Cell> {
        Some(Cell::from(*self))
    }
}

impl CellToken for char {
    fn to_cell(&self) -> Option<Cell> {
        Cell::from_char(*self)
    }
}

impl CellToken for u8 {
    fn to_cell(&self) -> Option<Cell> {
        Cell::try_from(*self).ok()
    }
}

impl CellToken for i32 {
    fn to_cell(&self) -> Option<Cell> {
        u8::try_from(*self).ok().and_then(|v| v.to_cell())
    }
}

impl CellToken for &str {
    fn to_cell(&self) -> Option<Cell> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Cell::from_char(c),
            _ => None,
        }
    }
}

/// Row-major W×H grid. Every coordinate holds exactly one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Largest grid any constructor will allocate, in cells.
pub const MAX_CELLS: usize = 1 << 28;

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GridError::malformed(format!(
            "grid dimensions must be positive, got {height}x{width}"
        )));
    }
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(GridError::malformed(format!(
            "grid {height}x{width} is too large (at most {MAX_CELLS} cells)"
        ))),
    }
}

impl CellGrid {
    /// An all-dead grid.
    pub fn dead(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Builds a grid from exactly `height` rows of exactly `width` binary tokens.
    pub fn with_cells<I, R, T>(width: usize, height: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: CellToken,
    {
        check_dimensions(width, height)?;
        // Grows one row at a time; the declared size is not trusted until the rows arrive.
        let mut cells = Vec::new();
        let mut row_count = 0;

        for (r, row) in rows.into_iter().enumerate() {
            if r >= height {
                return Err(GridError::malformed(format!(
                    "expected {height} rows, found more"
                )));
            }
            let start = cells.len();
            cells.reserve(width);
            for (c, token) in row.into_iter().enumerate() {
                if c >= width {
                    return Err(GridError::malformed(format!(
                        "row {r} is wider than {width} cells"
                    )));
                }
                let cell = token.to_cell().ok_or_else(|| {
                    GridError::malformed(format!(
                        "row {r}, column {c}: non-binary token {token:?}"
                    ))
                })?;
                cells.push(cell);
            }
            let found = cells.len() - start;
            if found != width {
                return Err(GridError::malformed(format!(
                    "row {r} has {found} cells, expected {width}"
                )));
            }
            row_count += 1;
        }

        if row_count != height {
            return Err(GridError::malformed(format!(
                "expected {height} rows, found {row_count}"
            )));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from `0`/`1` strings, one per row. Width comes from the first row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        Self::with_cells(width, rows.len(), rows.iter().map(|r| r.as_ref().chars()))
    }

    /// Builds a grid whose alive cells are exactly `alive` (given as `(row, col)`).
    pub fn from_alive_cells<I>(width: usize, height: usize, alive: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::dead(width, height)?;
        for (row, col) in alive {
            if row >= height || col >= width {
                return Err(GridError::malformed(format!(
                    "alive cell ({row}, {col}) lies outside the {height}x{width} grid"
                )));
            }
            let idx = grid.index(row, col);
            grid.cells[idx] = Cell::Alive;
        }
        Ok(grid)
    }

    /// Fills every cell with a fair coin flip from `rng`.
    pub fn random<G: Rng>(width: usize, height: usize, rng: &mut G) -> Result<Self> {
        check_dimensions(width, height)?;
        let cells = (0..width * height)
            .map(|_| Cell::from(rng.gen::<bool>()))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Reproducible random grid from a numeric seed.
    pub fn random_seeded(width: usize, height: usize, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::random(width, height, &mut rng)
    }

    /// Wraps cells produced by the rule engine. Caller guarantees `cells.len() == width * height`.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(row, col)`, or `OutOfBounds`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Whether the cell at `(row, col)` is alive.
    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool> {
        self.get(row, col).map(|c| c.is_alive())
    }

    /// Unchecked read for in-range coordinates.
    #[inline(always)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Rows in order, each a slice of `width` cells.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Row `row` as a `0`/`1` string, column 0 first.
    pub fn row_string(&self, row: usize) -> Result<String> {
        if row >= self.height {
            return Err(GridError::OutOfBounds {
                row,
                col: 0,
                width: self.width,
                height: self.height,
            });
        }
        let start = self.index(row, 0);
        Ok(self.cells[start..start + self.width]
            .iter()
            .map(|c| c.as_char())
            .collect())
    }

    /// Number of alive cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every alive cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i / width, i % width))
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}
