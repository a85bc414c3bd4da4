//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    5
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the server bootstrap and the request handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Page size used when a caller omits `limit`; parsed on every listing.
    pub paginator_limit_default: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Restricts CORS to a single origin. Any origin is allowed when unset.
    #[serde(default)]
    pub allowed_origin: Option<String>,
}
