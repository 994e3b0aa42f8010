// brdocs/src/commands/mod.rs
//! Command implementations for the brdocs CLI.

pub mod brdocs;
