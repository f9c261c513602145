//! Runtime server for Roster
//!
//! This crate provides the HTTP server, store connectors, query execution,
//! route classification and the request dispatcher.

pub mod connectors;
pub mod executor;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use connectors::{Connector, QueryParam};
pub use executor::QueryExecutor;
pub use handlers::AgentsHandler;
pub use routes::Route;
pub use server::{router, Runtime};
pub use state::AppState;
