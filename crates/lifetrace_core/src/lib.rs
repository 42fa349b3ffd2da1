//! # Lifetrace Core
//!
//! Deterministic Game of Life engine:
//! - [`grid::CellGrid`]: fixed-size immutable cell grid
//! - [`rule::RuleEngine`]: pure, double-buffered generation step
//! - [`simulator::Simulator`]: lazy, restartable sequence of generations
//! - configuration, run metrics and logging setup
//!
//! ## Example
//!
//! ```
//! use lifetrace_core::{simulator, CellGrid};
//! use lifetrace_data::BoundaryPolicy;
//!
//! let seed = CellGrid::from_rows(&["000", "111", "000"]).unwrap();
//! let history = simulator::run(seed, 2, BoundaryPolicy::Bounded)
//!     .unwrap()
//!     .collect_history();
//! assert_eq!(history.len(), 3);
//! assert_eq!(history[1].grid.to_string(), "010\n010\n010");
//! ```

/// Configuration file support
pub mod config;
/// Core error taxonomy
pub mod error;
/// Cell grid storage
pub mod grid;
/// Run statistics and logging setup
pub mod metrics;
/// Transition rule engine
pub mod rule;
/// Multi-generation driver
pub mod simulator;

pub use error::{GridError, Result};
pub use grid::{CellGrid, CellToken, MAX_CELLS};
pub use metrics::{init_logging, Metrics};
pub use rule::{live_neighbors, step, RuleEngine};
pub use simulator::{Generation, Generations, Simulator};
