//! Command-line front end for the benchmarking helpers.

pub mod cli;
pub mod commands;
pub mod summary;
