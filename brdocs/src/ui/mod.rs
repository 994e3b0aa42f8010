// brdocs/src/ui/mod.rs
//! Terminal output: report rendering and status messages.

pub mod output_format;
pub mod report_table;
