/// Asserts that a grid has exactly the given number of alive cells.
#[macro_export]
macro_rules! assert_population {
    ($grid:expr, $count:expr) => {
        assert_eq!($grid.population(), $count, "Population count mismatch");
    };
}

/// Asserts that a grid's rows read exactly as the given `0`/`1` strings.
#[macro_export]
macro_rules! assert_rows {
    ($grid:expr, [$($row:expr),* $(,)?]) => {
        let expected: Vec<&str> = vec![$($row),*];
        let actual: Vec<String> = (0..$grid.height())
            .map(|r| $grid.row_string(r).expect("row in range"))
            .collect();
        assert_eq!(actual, expected, "Grid rows mismatch");
    };
}

/// Asserts that every generation of a run equals the seed.
#[macro_export]
macro_rules! assert_still_life {
    ($seed:expr, $steps:expr, $boundary:expr) => {
        let seed = $seed;
        for generation in lifetrace_lib::model::simulator::run(seed.clone(), $steps, $boundary)
            .expect("valid generation count")
        {
            assert_eq!(
                *generation.grid, seed,
                "Generation {} drifted from the still life",
                generation.index
            );
        }
    };
}
