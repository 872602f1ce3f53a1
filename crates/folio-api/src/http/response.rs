//! JSON response bodies.
//!
//! Field names are camelCase to match what the blog front end already sends
//! and reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_core::net::mask_ip;
use folio_types::visitor::OnlineVisitor;

/// `{ "error": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{ "success": false, "error": "..." }`, used by the visitor endpoints.
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
}

impl FailureBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearHistoryRequest {
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementViewRequest {
    pub post_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementViewResponse {
    pub success: bool,
    pub view_count: i64,
}

#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub success: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorPing {
    pub visitor_id: Option<String>,
    pub user_agent: Option<String>,
}

/// A visitor as shown to clients, with the address masked.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorView {
    pub id: String,
    pub last_seen: DateTime<Utc>,
    pub user_agent: String,
    pub ip: String,
}

impl From<OnlineVisitor> for VisitorView {
    fn from(v: OnlineVisitor) -> Self {
        Self {
            id: v.id,
            last_seen: v.last_seen,
            user_agent: v.user_agent,
            ip: mask_ip(Some(&v.ip)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VisitorList {
    pub success: bool,
    pub count: usize,
    pub visitors: Vec<VisitorView>,
}

#[derive(Debug, Serialize)]
pub struct VisitorCount {
    pub success: bool,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealthBody {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub response_time: u64,
    pub timestamp: String,
}
