//! Type definitions for Roster
//!
//! This crate contains shared type definitions used across the Roster codebase,
//! including connector types and the JSON payloads returned by the HTTP surface.

pub mod connector;
pub mod runtime;

pub use connector::Connector;
pub use runtime::Row;
