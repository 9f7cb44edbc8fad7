//! Repository for the `projects` table.

use mentorlink_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::{
    CreateProject, Project, ProjectFilter, ProjectRelation, UpdateProject,
};

/// Column list shared across queries to avoid repetition. Also used by the
/// lifecycle transactions in `application_repo`.
pub(crate) const COLUMNS: &str = "id, title, description, owner_id, student_id, skills, \
    difficulty, status, duration, budget, github_url, live_url, images, created_at, updated_at";

/// Provides CRUD and listing operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with status `open`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (id, title, description, owner_id, skills, difficulty, duration,
                 budget, github_url, live_url, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.owner_id)
            .bind(&input.skills)
            .bind(input.difficulty)
            .bind(&input.duration)
            .bind(input.budget)
            .bind(&input.github_url)
            .bind(&input.live_url)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find a project by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects newest first with optional status/difficulty/skills
    /// filters. Skills match on overlap.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::project_status IS NULL OR status = $1)
               AND ($2::project_difficulty IS NULL OR difficulty = $2)
               AND ($3::text[] IS NULL OR skills && $3)
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(filter.status)
            .bind(filter.difficulty)
            .bind(&filter.skills)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count projects matching the same filters as [`Self::list`].
    pub async fn count(pool: &PgPool, filter: &ProjectFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM projects
             WHERE ($1::project_status IS NULL OR status = $1)
               AND ($2::project_difficulty IS NULL OR difficulty = $2)
               AND ($3::text[] IS NULL OR skills && $3)",
        )
        .bind(filter.status)
        .bind(filter.difficulty)
        .bind(&filter.skills)
        .fetch_one(pool)
        .await
    }

    /// List projects related to a user (as owner, assigned student, or
    /// either), newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        relation: ProjectRelation,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE {}
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3",
            relation_predicate(relation)
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count projects matching [`Self::list_for_user`].
    pub async fn count_for_user(
        pool: &PgPool,
        user_id: DbId,
        relation: ProjectRelation,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM projects WHERE {}",
            relation_predicate(relation)
        );
        sqlx::query_scalar(&query).bind(user_id).fetch_one(pool).await
    }

    /// The most recent projects platform-wide, for homepage highlights.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY created_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                skills = COALESCE($4, skills),
                difficulty = COALESCE($5, difficulty),
                status = COALESCE($6, status),
                duration = COALESCE($7, duration),
                budget = COALESCE($8, budget),
                github_url = COALESCE($9, github_url),
                live_url = COALESCE($10, live_url),
                images = COALESCE($11, images),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.skills)
            .bind(input.difficulty)
            .bind(input.status)
            .bind(&input.duration)
            .bind(input.budget)
            .bind(&input.github_url)
            .bind(&input.live_url)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project (applications cascade). Returns `true`
    /// if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// WHERE fragment selecting projects by a user's relationship to them.
/// `$1` is the user id in every branch.
fn relation_predicate(relation: ProjectRelation) -> &'static str {
    match relation {
        ProjectRelation::Owned => "owner_id = $1",
        ProjectRelation::Mentored => "student_id = $1",
        ProjectRelation::All => "(owner_id = $1 OR student_id = $1)",
    }
}
