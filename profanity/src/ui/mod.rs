//! Terminal output helpers: colored status messages and summary tables.

pub mod output_format;
pub mod summary;
