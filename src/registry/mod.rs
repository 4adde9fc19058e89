use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;

use crate::models::IssueRecord;
use crate::platform::ScanHandle;

/// Point-in-time view of one running scan, read straight from its live handle.
#[derive(Debug, Clone, Serialize)]
pub struct JobSnapshot {
    pub id: u32,
    pub issues: Vec<IssueRecord>,
    pub error_count: u32,
    pub insertion_point_count: u32,
    pub request_count: u32,
    pub percent_complete: u8,
    pub status: String,
}

impl JobSnapshot {
    fn read(id: u32, handle: &dyn ScanHandle) -> Self {
        JobSnapshot {
            id,
            issues: handle
                .issues()
                .iter()
                .map(|issue| IssueRecord::from_view(issue.as_ref()))
                .collect(),
            error_count: handle.error_count(),
            insertion_point_count: handle.insertion_point_count(),
            request_count: handle.request_count(),
            percent_complete: handle.percent_complete(),
            status: handle.status(),
        }
    }
}

/// In-memory map from job id to the platform's live scan handle. Ids come
/// from a strictly increasing counter, so an id freed by `cancel` is never
/// issued again.
pub struct JobRegistry {
    jobs: DashMap<u32, Arc<dyn ScanHandle>>,
    next_id: AtomicU32,
}

impl JobRegistry {
    pub fn new() -> Self {
        JobRegistry {
            jobs: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }

    /// Stores a handle and returns its new id. Never blocks on the scan.
    pub fn insert(&self, handle: Arc<dyn ScanHandle>) -> u32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.jobs.insert(id, handle);
        debug!(id, "scan job registered");
        id
    }

    pub fn snapshot(&self, id: u32) -> Option<JobSnapshot> {
        self.jobs
            .get(&id)
            .map(|entry| JobSnapshot::read(id, entry.value().as_ref()))
    }

    pub fn list(&self) -> Vec<JobSnapshot> {
        let mut jobs: Vec<JobSnapshot> = self
            .jobs
            .iter()
            .map(|entry| JobSnapshot::read(*entry.key(), entry.value().as_ref()))
            .collect();
        jobs.sort_by_key(|job| job.id);
        jobs
    }

    /// Signals the platform to stop the scan and removes the entry. The job
    /// is gone afterwards: a second cancel for the same id reports false.
    pub fn cancel(&self, id: u32) -> bool {
        match self.jobs.remove(&id) {
            Some((_, handle)) => {
                handle.cancel();
                debug!(id, "scan job cancelled and removed");
                true
            }
            None => false,
        }
    }

    /// Cancels and drops every registered job. Shutdown path.
    pub fn cancel_all(&self) {
        self.jobs.retain(|id, handle| {
            handle.cancel();
            debug!(id, "scan job cancelled at shutdown");
            false
        });
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}
