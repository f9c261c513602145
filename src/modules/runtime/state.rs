//! Shared runtime application state (HTTP handlers)

use crate::executor::QueryExecutor;
use std::sync::Arc;

/// Application state shared across handlers.
///
/// Holds the only handle to the store; nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<QueryExecutor>,
}

impl AppState {
    pub fn new(executor: Arc<QueryExecutor>) -> Self {
        Self { executor }
    }
}
