//! Montana CLI library.
//!
//! Command implementations, configuration loading and logging setup for the
//! `montana` binary. The library crates never touch the filesystem; this is
//! where rendered assets get written out.

pub mod commands;
pub mod config;
pub mod logging;
pub mod report;
