//! Fixed facts about the agents relation and the service that exposes it

/// Name of the relation every query reads from
pub const TABLE: &str = "agents";

/// Status value gating visibility in listing endpoints
pub const ACTIVE_STATUS: &str = "active";

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "BlackRoad Agents API";

/// Version string reported by the health endpoint
pub const SERVICE_VERSION: &str = "1.0.0";

/// Status literal reported by the health endpoint
pub const ONLINE_STATUS: &str = "online";

/// Page size used when `limit` is absent or unusable
pub const DEFAULT_LIMIT: i64 = 50;

/// Offset used when `offset` is absent or unusable
pub const DEFAULT_OFFSET: i64 = 0;

/// Maximum rows returned by a search
pub const SEARCH_LIMIT: i64 = 20;

/// Endpoint templates advertised by the health endpoint
pub const ENDPOINTS: &[&str] = &[
    "/agents",
    "/agents/:id",
    "/agents/type/:type",
    "/agents/random",
    "/agents/search?q=",
];
