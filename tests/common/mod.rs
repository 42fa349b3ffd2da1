pub mod macros;

use lifetrace_lib::model::CellGrid;

/// Named seed patterns as `(row, col)` offsets.
#[allow(dead_code)]
pub mod patterns {
    pub const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
    pub const BEEHIVE: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)];
    pub const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];
    pub const TOAD: &[(usize, usize)] = &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)];
    pub const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
}

#[allow(dead_code)]
pub struct GridBuilder {
    width: usize,
    height: usize,
    alive: Vec<(usize, usize)>,
}

#[allow(dead_code)]
impl GridBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            alive: Vec::new(),
        }
    }

    pub fn with_cell(mut self, row: usize, col: usize) -> Self {
        self.alive.push((row, col));
        self
    }

    /// Places `pattern` with its top-left corner at `(row, col)`.
    pub fn with_pattern(mut self, row: usize, col: usize, pattern: &[(usize, usize)]) -> Self {
        self.alive
            .extend(pattern.iter().map(|&(r, c)| (row + r, col + c)));
        self
    }

    pub fn build(self) -> CellGrid {
        CellGrid::from_alive_cells(self.width, self.height, self.alive)
            .expect("builder cells must lie inside the grid")
    }
}

/// Translates every alive cell by `(dr, dc)` on a torus.
#[allow(dead_code)]
pub fn shifted(grid: &CellGrid, dr: usize, dc: usize) -> CellGrid {
    let (h, w) = (grid.height(), grid.width());
    CellGrid::from_alive_cells(
        w,
        h,
        grid.alive_cells().map(|(r, c)| ((r + dr) % h, (c + dc) % w)),
    )
    .expect("wrapped cells stay inside the grid")
}

/// Writes `content` to a per-process temp file and returns its path.
#[allow(dead_code)]
pub fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("lifetrace_{}_{}", std::process::id(), name));
    std::fs::write(&path, content).expect("temp file should be writable");
    path
}
