//! Agents request dispatcher

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::Response,
};
use roster_core::agent::{
    DEFAULT_LIMIT, DEFAULT_OFFSET, ENDPOINTS, ONLINE_STATUS, SERVICE_NAME, SERVICE_VERSION,
};
use roster_core::RosterError;
use roster_types::runtime::{
    AgentListResponse, AgentsByTypeResponse, ErrorResponse, HealthResponse, SearchResponse,
    StatsResponse,
};
use tracing::{debug, error, warn};

use super::params::QueryParams;
use super::response::{json_response, preflight_response};
use crate::routes::Route;
use crate::state::AppState;

/// Handler for every request the service receives
pub struct AgentsHandler;

impl AgentsHandler {
    /// Handle any method on any path
    ///
    /// Store failures never escape: they become a 500 carrying the error message.
    pub async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
        if method == Method::OPTIONS {
            return preflight_response();
        }

        let route = Route::classify(&method, uri.path());
        debug!("{} {} -> {}", method, uri.path(), route.name());

        match Self::handle(&state, route, &uri).await {
            Ok(response) => response,
            Err(e) => {
                if e.is_error() {
                    error!("{} {} failed: {}", method, uri.path(), e);
                } else {
                    warn!("{} {} failed: {}", method, uri.path(), e);
                }
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &ErrorResponse::new(e.message()),
                )
            }
        }
    }

    async fn handle(state: &AppState, route: Route, uri: &Uri) -> Result<Response, RosterError> {
        let executor = &state.executor;
        let params = QueryParams::from_uri(uri);

        let response = match route {
            Route::Health => {
                let agents_count = executor.count_all().await?;
                json_response(
                    StatusCode::OK,
                    &HealthResponse {
                        service: SERVICE_NAME.to_string(),
                        version: SERVICE_VERSION.to_string(),
                        status: ONLINE_STATUS.to_string(),
                        agents_count,
                        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
                    },
                )
            }
            Route::ListAgents => {
                // A zero limit reads as "not given"
                let limit = params
                    .int("limit")
                    .filter(|&n| n != 0)
                    .unwrap_or(DEFAULT_LIMIT);
                let offset = params.int("offset").unwrap_or(DEFAULT_OFFSET);
                let agents = executor.list_active(limit, offset).await?;
                json_response(StatusCode::OK, &AgentListResponse::new(agents, limit, offset))
            }
            Route::AgentById(id) => match executor.find_by_id(&id).await? {
                Some(agent) => json_response(StatusCode::OK, &agent),
                None => json_response(
                    StatusCode::NOT_FOUND,
                    &ErrorResponse::new("Agent not found"),
                ),
            },
            Route::AgentsByType(agent_type) => {
                let agents = executor.list_by_type(&agent_type).await?;
                json_response(
                    StatusCode::OK,
                    &AgentsByTypeResponse::new(agent_type, agents),
                )
            }
            // An empty pick is answered with 200, unlike the by-id miss.
            Route::RandomAgent => match executor.random_active().await? {
                Some(agent) => json_response(StatusCode::OK, &agent),
                None => json_response(StatusCode::OK, &ErrorResponse::new("No agents found")),
            },
            Route::SearchAgents => {
                let q = params.get("q").unwrap_or_default();
                let agents = executor.search(q).await?;
                json_response(StatusCode::OK, &SearchResponse::new(q, agents))
            }
            Route::Stats => {
                let total = executor.count_all().await?;
                let by_type = executor.count_by_type().await?;
                json_response(StatusCode::OK, &StatsResponse { total, by_type })
            }
            Route::NotFound => json_response(
                StatusCode::NOT_FOUND,
                &ErrorResponse::not_found(uri.path()),
            ),
        };

        Ok(response)
    }
}
