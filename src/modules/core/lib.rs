//! Core domain logic for Roster
//!
//! This crate contains the service configuration model, the fixed facts about
//! the agents relation, and the error type shared by every Roster crate.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::RosterError;
