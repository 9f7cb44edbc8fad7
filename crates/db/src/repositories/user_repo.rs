//! Repository for the `users` table.

use mentorlink_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{CreateUser, DirectoryFilter, UpdateUser, User, UserFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, role, skills, experience, avatar, \
    bio, location, github, linkedin, website, is_available, rating, total_reviews, \
    created_at, updated_at";

/// Provides CRUD and directory operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, name, email, password_hash, role, skills, experience, avatar)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role)
            .bind(&input.skills)
            .bind(&input.experience)
            .bind(&input.avatar)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email, case-insensitively.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Batch-load users by id for response assembly. Order is unspecified.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<User>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ANY($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List users, newest first, with optional role and skills filters.
    ///
    /// Skills match on overlap: a user matches if any filter skill appears
    /// in their skill set.
    pub async fn list(
        pool: &PgPool,
        filter: &UserFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE ($1::user_role IS NULL OR role = $1)
               AND ($2::text[] IS NULL OR skills && $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(filter.role)
            .bind(&filter.skills)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count users matching the same filters as [`Self::list`].
    pub async fn count(pool: &PgPool, filter: &UserFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM users
             WHERE ($1::user_role IS NULL OR role = $1)
               AND ($2::text[] IS NULL OR skills && $2)",
        )
        .bind(filter.role)
        .bind(&filter.skills)
        .fetch_one(pool)
        .await
    }

    /// List available mentors (engineers), best-rated first.
    pub async fn list_mentors(
        pool: &PgPool,
        filter: &DirectoryFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE role = 'engineer' AND is_available = TRUE
               AND ($1::text[] IS NULL OR skills && $1)
               AND ($2::text IS NULL OR location ILIKE '%' || $2 || '%')
             ORDER BY rating DESC, total_reviews DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&filter.skills)
            .bind(&filter.location)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count mentors matching the same filters as [`Self::list_mentors`].
    pub async fn count_mentors(pool: &PgPool, filter: &DirectoryFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM users
             WHERE role = 'engineer' AND is_available = TRUE
               AND ($1::text[] IS NULL OR skills && $1)
               AND ($2::text IS NULL OR location ILIKE '%' || $2 || '%')",
        )
        .bind(&filter.skills)
        .bind(&filter.location)
        .fetch_one(pool)
        .await
    }

    /// Find a user by id, but only if they are an engineer.
    pub async fn find_mentor(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND role = 'engineer'");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List students, newest first.
    pub async fn list_students(
        pool: &PgPool,
        filter: &DirectoryFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE role = 'student'
               AND ($1::text[] IS NULL OR skills && $1)
               AND ($2::text IS NULL OR location ILIKE '%' || $2 || '%')
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&filter.skills)
            .bind(&filter.location)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count students matching the same filters as [`Self::list_students`].
    pub async fn count_students(
        pool: &PgPool,
        filter: &DirectoryFilter,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM users
             WHERE role = 'student'
               AND ($1::text[] IS NULL OR skills && $1)
               AND ($2::text IS NULL OR location ILIKE '%' || $2 || '%')",
        )
        .bind(&filter.skills)
        .bind(&filter.location)
        .fetch_one(pool)
        .await
    }

    /// Find a user by id, but only if they are a student.
    pub async fn find_student(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND role = 'student'");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Top available mentors by rating, for homepage highlights.
    pub async fn top_mentors(pool: &PgPool, limit: i64) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE role = 'engineer' AND is_available = TRUE
             ORDER BY rating DESC, total_reviews DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a user's profile. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                bio = COALESCE($3, bio),
                location = COALESCE($4, location),
                github = COALESCE($5, github),
                linkedin = COALESCE($6, linkedin),
                website = COALESCE($7, website),
                skills = COALESCE($8, skills),
                experience = COALESCE($9, experience),
                is_available = COALESCE($10, is_available),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(&input.location)
            .bind(&input.github)
            .bind(&input.linkedin)
            .bind(&input.website)
            .bind(&input.skills)
            .bind(&input.experience)
            .bind(input.is_available)
            .fetch_optional(pool)
            .await
    }

    /// Replace a user's avatar URL.
    pub async fn update_avatar(
        pool: &PgPool,
        id: DbId,
        avatar: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET avatar = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(avatar)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a user. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
