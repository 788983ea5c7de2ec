//! Per-session log of past analyses.
//!
//! Append-only from the caller's point of view: entries are added newest
//! first and the oldest fall off once a session reaches its cap. Idle
//! sessions expire, and the number of live sessions is bounded. The engine
//! never reads or writes this log.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache;
use serde::Serialize;
use uuid::Uuid;

use crate::soil::AnalysisReport;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub report: Arc<AnalysisReport>,
}

#[derive(Clone)]
pub struct AnalysisHistory {
    sessions: Cache<String, Arc<Vec<HistoryEntry>>>,
    max_entries: usize,
}

impl AnalysisHistory {
    pub fn new(max_sessions: u64, max_entries: usize, idle: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(max_sessions)
                .time_to_idle(idle)
                .build(),
            max_entries,
        }
    }

    /// Number of live sessions after pending evictions are applied.
    pub async fn session_count(&self) -> u64 {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count()
    }

    /// Record a report at the head of a session's history.
    pub async fn record(&self, session_id: &str, report: Arc<AnalysisReport>) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            report,
        };
        let max_entries = self.max_entries;
        let new_entry = entry.clone();

        self.sessions
            .entry(session_id.to_string())
            .and_upsert_with(|existing| {
                let mut entries = Vec::with_capacity(max_entries);
                entries.push(new_entry);
                if let Some(existing) = existing {
                    entries.extend(existing.into_value().iter().cloned());
                }
                entries.truncate(max_entries);
                std::future::ready(Arc::new(entries))
            })
            .await;

        entry
    }

    /// Entries for a session, newest first. Unknown sessions are empty.
    pub async fn entries(&self, session_id: &str) -> Vec<HistoryEntry> {
        self.sessions
            .get(session_id)
            .await
            .map(|entries| entries.as_ref().clone())
            .unwrap_or_default()
    }
}
