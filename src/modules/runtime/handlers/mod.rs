//! HTTP request handlers for the Roster server
//!
//! Every request lands in [`AgentsHandler::dispatch`], which classifies it,
//! runs the matching query and shapes the JSON response.

mod agents;
mod params;
mod response;

pub use agents::AgentsHandler;
pub use params::{parse_int, QueryParams};
pub use response::{json_response, preflight_response, CORS_HEADERS};
