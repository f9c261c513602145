//! Domain models for Roster configuration and the agents relation

pub mod agent;
mod service;
mod store;
mod types;

pub use service::Service;
pub use store::StoreConfig;
pub use types::{PoolConfig, ServerConfig};
