//! Word-source compilation, caching, scanning and replacement.
//!
//! These are the building blocks the filter pipeline composes: `compiler` turns a
//! word list into a `SourceFilter`, `cache` memoizes compiled filters, `scanner`
//! finds whole-word matches and `replacement` rewrites them.

pub mod cache;
pub mod compiler;
pub mod replacement;
pub mod scanner;
