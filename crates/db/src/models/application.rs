//! Application entity model and lifecycle outcome types.

use mentorlink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::project::Project;

/// Lifecycle state of an application. `Accepted` and `Rejected` are
/// terminal: no transition leads out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// An application row from the `applications` table.
#[derive(Debug, Clone, FromRow)]
pub struct Application {
    pub id: DbId,
    pub project_id: DbId,
    pub student_id: DbId,
    pub message: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: Timestamp,
}

/// The owner's decision on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecideAction {
    Accept,
    Reject,
}

/// Result of a submit-application transaction.
///
/// Domain outcomes are reported as data so the repository layer stays
/// `sqlx::Error`-only; the handler maps them onto the error taxonomy.
#[derive(Debug)]
pub enum ApplyOutcome {
    Applied(Application),
    ProjectNotFound,
    ProjectNotOpen,
    AlreadyApplied,
}

/// Result of a decide-application transaction.
#[derive(Debug)]
pub enum DecideOutcome {
    /// The decision landed; carries the post-transaction project row.
    Decided(Project),
    ProjectNotFound,
    ApplicationNotFound,
    /// The target application is no longer pending.
    AlreadyDecided,
    /// Accept refused: the project already has an assigned student.
    StudentAlreadyAssigned,
}

/// Result of the direct-assign path (resolves a student to their pending
/// application, then accepts it).
#[derive(Debug)]
pub enum AssignOutcome {
    Assigned(Project),
    ProjectNotFound,
    /// The student has no pending application on this project.
    NoPendingApplication,
    StudentAlreadyAssigned,
}
