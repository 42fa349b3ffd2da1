//! # Lifetrace Data
//!
//! Plain data types shared by every lifetrace crate: the binary [`Cell`],
//! the [`BoundaryPolicy`] used for neighbor lookups, the birth/survival
//! [`Rule`] and the [`TraceStyle`] of emitted traces.

pub mod data;

pub use data::boundary::BoundaryPolicy;
pub use data::cell::Cell;
pub use data::rule::{NeighborSet, Rule};
pub use data::trace::TraceStyle;
