pub mod boundary;
pub mod cell;
pub mod rule;
pub mod trace;
