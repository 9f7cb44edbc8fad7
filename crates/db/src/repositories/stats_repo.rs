//! Aggregate count queries for dashboard and profile statistics.

use mentorlink_core::types::DbId;
use sqlx::PgPool;

use crate::models::stats::{PlatformCounts, ProfileCounts};

/// Provides read-only aggregate counts. No mutation lives here.
pub struct StatsRepo;

impl StatsRepo {
    /// Platform-wide project and user counts in a single round-trip.
    pub async fn platform_counts(pool: &PgPool) -> Result<PlatformCounts, sqlx::Error> {
        sqlx::query_as::<_, PlatformCounts>(
            "SELECT
                (SELECT COUNT(*) FROM projects) AS total_projects,
                (SELECT COUNT(*) FROM projects
                  WHERE status IN ('open', 'in-progress')) AS active_projects,
                (SELECT COUNT(*) FROM projects
                  WHERE status = 'completed') AS completed_projects,
                (SELECT COUNT(*) FROM users WHERE role = 'engineer') AS mentor_count,
                (SELECT COUNT(*) FROM users WHERE role = 'student') AS student_count",
        )
        .fetch_one(pool)
        .await
    }

    /// Project counts for one user, by relationship and status.
    pub async fn profile_counts(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<ProfileCounts, sqlx::Error> {
        sqlx::query_as::<_, ProfileCounts>(
            "SELECT
                (SELECT COUNT(*) FROM projects WHERE owner_id = $1) AS owned,
                (SELECT COUNT(*) FROM projects WHERE student_id = $1) AS mentored,
                (SELECT COUNT(*) FROM projects
                  WHERE (owner_id = $1 OR student_id = $1)
                    AND status = 'completed') AS completed,
                (SELECT COUNT(*) FROM projects
                  WHERE (owner_id = $1 OR student_id = $1)
                    AND status = 'in-progress') AS in_progress",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
