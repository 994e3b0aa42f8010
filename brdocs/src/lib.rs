// brdocs/src/lib.rs
//! # brdocs CLI
//!
//! Command-line front end for `brdocs-core`: parses arguments, loads the
//! configuration, runs one operation and prints its report.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
