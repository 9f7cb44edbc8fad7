//! Repository for the `applications` table and the lifecycle transactions.
//!
//! Every lifecycle write (apply, decide, direct assign) runs inside a
//! transaction that first locks the parent project row with `FOR UPDATE`,
//! serializing read-modify-write sequences per project. The accept write is
//! additionally conditional (`AND student_id IS NULL`) and the partial
//! unique index on accepted applications backstops the invariant at the
//! schema level, so two concurrent accepts can never both win.

use mentorlink_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::application::{
    Application, ApplicationStatus, ApplyOutcome, AssignOutcome, DecideAction, DecideOutcome,
};
use crate::models::project::{Project, ProjectStatus};
use crate::repositories::project_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, student_id, message, status, applied_at";

/// Provides lifecycle and listing operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// List a project's applications in submission order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM applications
             WHERE project_id = $1
             ORDER BY applied_at ASC, id ASC"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Batch-load the applications of several projects for response assembly.
    pub async fn list_for_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<Vec<Application>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM applications
             WHERE project_id = ANY($1)
             ORDER BY applied_at ASC, id ASC"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await
    }

    /// Submit an application: insert a `pending` row if the project exists,
    /// is open, and this student has not applied before.
    pub async fn apply(
        pool: &PgPool,
        project_id: DbId,
        student_id: DbId,
        message: Option<&str>,
    ) -> Result<ApplyOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(project) = lock_project(&mut tx, project_id).await? else {
            return Ok(ApplyOutcome::ProjectNotFound);
        };
        if project.status != ProjectStatus::Open {
            return Ok(ApplyOutcome::ProjectNotOpen);
        }

        let already_applied: Option<DbId> = sqlx::query_scalar(
            "SELECT id FROM applications WHERE project_id = $1 AND student_id = $2",
        )
        .bind(project_id)
        .bind(student_id)
        .fetch_optional(&mut *tx)
        .await?;
        if already_applied.is_some() {
            return Ok(ApplyOutcome::AlreadyApplied);
        }

        let query = format!(
            "INSERT INTO applications (id, project_id, student_id, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(Uuid::now_v7())
            .bind(project_id)
            .bind(student_id)
            .bind(message)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ApplyOutcome::Applied(application))
    }

    /// Decide a pending application.
    ///
    /// Accept assigns the student, moves the project to `in-progress`, and
    /// auto-rejects every other still-pending application in the same
    /// transaction. Reject touches only the target application. Terminal
    /// applications admit no further decision.
    pub async fn decide(
        pool: &PgPool,
        project_id: DbId,
        application_id: DbId,
        action: DecideAction,
    ) -> Result<DecideOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(project) = lock_project(&mut tx, project_id).await? else {
            return Ok(DecideOutcome::ProjectNotFound);
        };

        let query = format!(
            "SELECT {COLUMNS} FROM applications WHERE id = $1 AND project_id = $2"
        );
        let Some(application) = sqlx::query_as::<_, Application>(&query)
            .bind(application_id)
            .bind(project_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(DecideOutcome::ApplicationNotFound);
        };

        if application.status != ApplicationStatus::Pending {
            return Ok(DecideOutcome::AlreadyDecided);
        }

        match action {
            DecideAction::Reject => {
                sqlx::query("UPDATE applications SET status = 'rejected' WHERE id = $1")
                    .bind(application_id)
                    .execute(&mut *tx)
                    .await?;
                tx.commit().await?;
                Ok(DecideOutcome::Decided(project))
            }
            DecideAction::Accept => {
                if project.student_id.is_some() {
                    return Ok(DecideOutcome::StudentAlreadyAssigned);
                }
                let Some(updated) =
                    accept_pending(&mut tx, project_id, application_id, application.student_id)
                        .await?
                else {
                    return Ok(DecideOutcome::StudentAlreadyAssigned);
                };
                tx.commit().await?;
                Ok(DecideOutcome::Decided(updated))
            }
        }
    }

    /// Direct-assign a student by accepting their pending application.
    ///
    /// Kept for the legacy assign endpoint; it goes through the exact same
    /// guarded accept writes as [`Self::decide`], so a project can never end
    /// up with an assigned student and no accepted application.
    pub async fn assign_student(
        pool: &PgPool,
        project_id: DbId,
        student_id: DbId,
    ) -> Result<AssignOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(project) = lock_project(&mut tx, project_id).await? else {
            return Ok(AssignOutcome::ProjectNotFound);
        };
        if project.student_id.is_some() {
            return Ok(AssignOutcome::StudentAlreadyAssigned);
        }

        let application_id: Option<DbId> = sqlx::query_scalar(
            "SELECT id FROM applications
             WHERE project_id = $1 AND student_id = $2 AND status = 'pending'",
        )
        .bind(project_id)
        .bind(student_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(application_id) = application_id else {
            return Ok(AssignOutcome::NoPendingApplication);
        };

        let Some(updated) = accept_pending(&mut tx, project_id, application_id, student_id).await?
        else {
            return Ok(AssignOutcome::StudentAlreadyAssigned);
        };
        tx.commit().await?;
        Ok(AssignOutcome::Assigned(updated))
    }
}

/// Lock a project row for the duration of the transaction.
async fn lock_project(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
) -> Result<Option<Project>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM projects WHERE id = $1 FOR UPDATE",
        project_repo::COLUMNS
    );
    sqlx::query_as::<_, Project>(&query)
        .bind(project_id)
        .fetch_optional(&mut **tx)
        .await
}

/// The accept writes, shared by decide-accept and direct assign.
///
/// The project update only lands while `student_id` is still unset; returns
/// `None` when another accept won in the meantime.
async fn accept_pending(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
    application_id: DbId,
    student_id: DbId,
) -> Result<Option<Project>, sqlx::Error> {
    let query = format!(
        "UPDATE projects
         SET student_id = $2, status = 'in-progress', updated_at = NOW()
         WHERE id = $1 AND student_id IS NULL
         RETURNING {}",
        project_repo::COLUMNS
    );
    let updated = sqlx::query_as::<_, Project>(&query)
        .bind(project_id)
        .bind(student_id)
        .fetch_optional(&mut **tx)
        .await?;
    let Some(updated) = updated else {
        return Ok(None);
    };

    sqlx::query("UPDATE applications SET status = 'accepted' WHERE id = $1")
        .bind(application_id)
        .execute(&mut **tx)
        .await?;

    // Every other application still pending on this project auto-rejects;
    // already-decided siblings stay untouched.
    sqlx::query(
        "UPDATE applications SET status = 'rejected'
         WHERE project_id = $1 AND id <> $2 AND status = 'pending'",
    )
    .bind(project_id)
    .bind(application_id)
    .execute(&mut **tx)
    .await?;

    Ok(Some(updated))
}
