//! Request classification
//!
//! Maps method and path onto the fixed set of operations. Checks run in
//! precedence order and the first match wins.

use axum::http::Method;
use once_cell::sync::Lazy;
use regex::Regex;

/// `/agents/agent-NNNN`, exactly four digits
static AGENT_ID_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/agents/(agent-[0-9]{4})$").unwrap());

/// `/agents/type/{type}`, one or more word characters
static AGENT_TYPE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/agents/type/([A-Za-z0-9_]+)$").unwrap());

/// A classified request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Health,
    ListAgents,
    AgentById(String),
    AgentsByType(String),
    RandomAgent,
    SearchAgents,
    /// Matched on path alone, any method
    Stats,
    NotFound,
}

impl Route {
    /// Classify a non-preflight request
    pub fn classify(method: &Method, path: &str) -> Self {
        let is_get = *method == Method::GET;

        if is_get && (path == "/" || path == "/health") {
            return Route::Health;
        }
        if is_get && path == "/agents" {
            return Route::ListAgents;
        }
        if is_get {
            if let Some(cap) = AGENT_ID_PATH.captures(path) {
                return Route::AgentById(cap[1].to_string());
            }
            if let Some(cap) = AGENT_TYPE_PATH.captures(path) {
                return Route::AgentsByType(cap[1].to_string());
            }
        }
        if is_get && path == "/agents/random" {
            return Route::RandomAgent;
        }
        if is_get && path == "/agents/search" {
            return Route::SearchAgents;
        }
        if path == "/agents/stats" {
            return Route::Stats;
        }

        Route::NotFound
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Route::Health => "health",
            Route::ListAgents => "list",
            Route::AgentById(_) => "by-id",
            Route::AgentsByType(_) => "by-type",
            Route::RandomAgent => "random",
            Route::SearchAgents => "search",
            Route::Stats => "stats",
            Route::NotFound => "not-found",
        }
    }
}
