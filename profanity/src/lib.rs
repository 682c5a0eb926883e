// profanity/src/lib.rs
//! # Profanity CLI Application
//!
//! This crate provides the command-line interface over `profanity-core`: the
//! `filter`, `scan` and `sources` commands, logger setup and terminal output.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
