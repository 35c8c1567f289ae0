//! CLI library components for Validata.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
