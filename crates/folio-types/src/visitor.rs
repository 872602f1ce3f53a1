//! Online visitor presence types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor seen recently enough to count as online.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineVisitor {
    pub id: String,
    pub last_seen: DateTime<Utc>,
    pub user_agent: String,
    /// Client address as reported by the proxy headers. Masked before it
    /// leaves the process.
    pub ip: String,
}
