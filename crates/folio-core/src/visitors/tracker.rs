//! In-memory presence map of recently active visitors.
//!
//! A visitor is online while its last `touch` is no older than the
//! configured timeout. Expired entries are dropped by `sweep`, which runs on
//! every read and periodically from a background task.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use folio_types::visitor::OnlineVisitor;
use tokio_util::sync::CancellationToken;

/// Concurrent visitor registry. Cloning shares the same map.
#[derive(Debug, Clone)]
pub struct VisitorTracker {
    visitors: Arc<DashMap<String, OnlineVisitor>>,
    timeout: chrono::Duration,
}

impl VisitorTracker {
    pub fn new(timeout: Duration) -> Self {
        Self {
            visitors: Arc::new(DashMap::new()),
            timeout: chrono::Duration::from_std(timeout).unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Insert or refresh a visitor and return the number of tracked visitors.
    pub fn touch(&self, visitor_id: &str, user_agent: Option<&str>, ip: &str) -> usize {
        self.touch_at(visitor_id, user_agent, ip, Utc::now())
    }

    pub fn touch_at(
        &self,
        visitor_id: &str,
        user_agent: Option<&str>,
        ip: &str,
        now: DateTime<Utc>,
    ) -> usize {
        let user_agent = user_agent
            .filter(|ua| !ua.is_empty())
            .unwrap_or("unknown")
            .to_string();

        self.visitors.insert(
            visitor_id.to_string(),
            OnlineVisitor {
                id: visitor_id.to_string(),
                last_seen: now,
                user_agent,
                ip: ip.to_string(),
            },
        );
        self.visitors.len()
    }

    /// Drop visitors idle longer than the timeout. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Utc::now())
    }

    pub fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.visitors.len();
        self.visitors
            .retain(|_, visitor| now.signed_duration_since(visitor.last_seen) <= self.timeout);
        before.saturating_sub(self.visitors.len())
    }

    /// Sweep, then return a copy of everyone still online.
    pub fn snapshot(&self) -> Vec<OnlineVisitor> {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&self, now: DateTime<Utc>) -> Vec<OnlineVisitor> {
        self.sweep_at(now);
        let mut visitors: Vec<OnlineVisitor> =
            self.visitors.iter().map(|r| r.value().clone()).collect();
        visitors.sort_by(|a, b| b.last_seen.cmp(&a.last_seen));
        visitors
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

/// Run `tracker.sweep()` every `interval` until `cancel` fires.
pub fn spawn_sweeper(
    tracker: VisitorTracker,
    interval: Duration,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("visitor sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = tracker.sweep();
                    if removed > 0 {
                        tracing::debug!(removed, online = tracker.len(), "swept idle visitors");
                    }
                }
            }
        }
    })
}
