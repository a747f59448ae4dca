//! Structured outcome of a seeding run.
//!
//! Every configured user gets one [`UserReport`] with an outcome per record
//! kind, so operators can tell what was created, skipped, or failed without
//! reading the log stream.

use std::fmt;

use serde::Serialize;

use rentals::models::Role;

/// Kind of record a batch creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    WorkOrders,
    Complaints,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::WorkOrders => f.write_str("work orders"),
            RecordKind::Complaints => f.write_str("complaints"),
        }
    }
}

/// What happened to one record kind for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// Below threshold; a batch ran to completion.
    Seeded { existing: usize, created: usize },
    /// Already at or above threshold; nothing written.
    Skipped { existing: usize },
    /// The record kind does not apply to this user's role.
    NotApplicable,
    /// The existing-count query failed, so seeding was not attempted.
    CountFailed { error: String },
    /// A batch started and stopped at its first error.
    Failed {
        existing: usize,
        created: usize,
        error: String,
    },
}

impl BatchOutcome {
    pub fn created(&self) -> usize {
        match self {
            BatchOutcome::Seeded { created, .. } | BatchOutcome::Failed { created, .. } => *created,
            _ => 0,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            BatchOutcome::CountFailed { .. } | BatchOutcome::Failed { .. }
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserReport {
    pub label: String,
    pub clerk_id: String,
    pub user_id: i64,
    pub email: String,
    pub role: Role,
    pub work_orders: BatchOutcome,
    pub complaints: BatchOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    pub users: Vec<UserReport>,
}

impl SeedReport {
    /// Total records persisted across all users and kinds.
    pub fn records_created(&self) -> usize {
        self.users
            .iter()
            .map(|u| u.work_orders.created() + u.complaints.created())
            .sum()
    }

    /// Number of per-user batches that failed to count or to complete.
    pub fn failures(&self) -> usize {
        self.users
            .iter()
            .flat_map(|u| [&u.work_orders, &u.complaints])
            .filter(|o| o.is_failure())
            .count()
    }

    pub fn user(&self, clerk_id: &str) -> Option<&UserReport> {
        self.users.iter().find(|u| u.clerk_id == clerk_id)
    }

    /// Serializes the report as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
