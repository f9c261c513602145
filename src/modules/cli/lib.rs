//! Roster CLI
//!
//! This crate provides the command-line interface for Roster:
//! - run: Start the server
//! - check: Validate the configuration and probe the store

pub mod commands;

pub use commands::{level_from_config, Cli, Commands};
