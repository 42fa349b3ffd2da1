//! # Lifetrace IO
//!
//! Text formats around the simulation core:
//! - seed files (coordinate list and dense rows)
//! - generation traces: encoding, streaming, parsing and comparison
//! - dense matrix files and their product
//! - structured error handling and JSON output helpers

/// Error types and result aliases for I/O operations
pub mod error;
/// Dense matrix file format and multiplication
pub mod matrix;
/// Seed file parsing
pub mod seed;
/// JSON output helpers
pub mod serialization;
/// Trace encoding, framing and parsing
pub mod trace;

pub use error::{IoError, Result};
pub use matrix::Matrix;
pub use seed::{clean_path, parse_seed, read_seed_file, SeedFormat};
pub use serialization::{to_json, to_json_pretty, write_json_lines};
pub use trace::{
    compare_traces, encode, encode_grid, parse_trace, render_trace, row_value, row_values,
    write_trace, TraceComparison, TraceWriter, DELIMITER,
};
