//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the client.
pub struct AppConfig {
    /// Base location of the remote collection resource.
    pub api_base_url: String,
    /// Optional per-request timeout; calls wait indefinitely when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}
