//! CodeLab: a terminal code playground
//!
//! Guesses the complexity of a snippet, charts the guess, and forwards the
//! snippet to a Judge0 compatible service to run it.

pub mod commands;
pub mod config;
pub mod judge;
pub mod language;
pub mod report;

pub use config::Config;
pub use language::Language;
pub use report::{OutputFormat, Report};
