// profanity-core/src/engines/mod.rs
//! Implementations of the `ProfanityEngine` trait.
//!
//! `pipeline` runs every word source in order over the current text and records
//! one step per source.

pub mod pipeline;
