//! The tools module provides the helpers around the huffzip core.
//!
//! The tools are:
//! - cli: command line interface filling the HuffOpts run options.
//! - freq_count: symbol frequency counting, the first compression pass.
pub mod cli;
pub mod freq_count;
