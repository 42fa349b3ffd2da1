pub use lifetrace_core::{CellGrid, Generation, Generations, GridError, RuleEngine, Simulator};
pub use lifetrace_data::{BoundaryPolicy, Cell, Rule, TraceStyle};

pub mod grid {
    pub use lifetrace_core::grid::*;
}
pub mod rule {
    pub use lifetrace_core::rule::*;
}
pub mod simulator {
    pub use lifetrace_core::simulator::*;
}
pub mod config {
    pub use lifetrace_core::config::*;
}
pub mod metrics {
    pub use lifetrace_core::metrics::*;
}
pub mod seed {
    pub use lifetrace_io::seed::*;
}
pub mod trace {
    pub use lifetrace_io::trace::*;
}
pub mod matrix {
    pub use lifetrace_io::matrix::*;
}
