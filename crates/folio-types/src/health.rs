//! Database health probe result.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseHealth {
    pub is_connected: bool,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
