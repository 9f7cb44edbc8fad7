//! Aggregate count rows for dashboard and profile statistics.

use sqlx::FromRow;

/// Platform-wide counts for the homepage dashboard.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct PlatformCounts {
    pub total_projects: i64,
    /// Projects with status `open` or `in-progress`.
    pub active_projects: i64,
    pub completed_projects: i64,
    pub mentor_count: i64,
    pub student_count: i64,
}

/// Per-user project counts for profile views.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ProfileCounts {
    /// Projects the user owns.
    pub owned: i64,
    /// Projects the user works on as the assigned student.
    pub mentored: i64,
    /// Completed projects in either relationship.
    pub completed: i64,
    /// In-progress projects in either relationship.
    pub in_progress: i64,
}
