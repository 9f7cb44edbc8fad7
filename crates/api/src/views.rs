//! Fixed public response shapes, one serialization type per entity.
//!
//! Every entity reaches the wire through exactly one of these types, so
//! field exposure is decided in one place. [`PublicUser`] is the full
//! profile minus the credential hash; [`UserRef`] and [`ApplicantRef`] are
//! the whitelisted subsets inlined into related entities.

use std::collections::HashMap;

use mentorlink_core::text::truncate_chars;
use mentorlink_core::types::{DbId, Timestamp};
use mentorlink_db::models::application::{Application, ApplicationStatus};
use mentorlink_db::models::project::{Difficulty, Project, ProjectStatus};
use mentorlink_db::models::stats::ProfileCounts;
use mentorlink_db::models::user::{Role, User};
use serde::Serialize;

/// Character budget for activity descriptions.
const ACTIVITY_DESCRIPTION_CHARS: usize = 140;

/// A user's full public profile. The credential hash has no field here and
/// therefore cannot leak.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub skills: Vec<String>,
    pub experience: String,
    pub avatar: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub is_available: bool,
    pub rating: f64,
    pub total_reviews: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            skills: user.skills.clone(),
            experience: user.experience.clone(),
            avatar: user.avatar.clone(),
            bio: user.bio.clone(),
            location: user.location.clone(),
            github: user.github.clone(),
            linkedin: user.linkedin.clone(),
            website: user.website.clone(),
            is_available: user.is_available,
            rating: user.rating,
            total_reviews: user.total_reviews,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// The whitelisted subset inlined for a project's owner or assigned student.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: DbId,
    pub name: String,
    pub avatar: String,
    pub role: Role,
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            role: user.role,
        }
    }
}

/// The applicant subset shown to project owners in application lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRef {
    pub id: DbId,
    pub name: String,
    pub avatar: String,
    pub email: String,
    pub skills: Vec<String>,
    pub experience: String,
}

impl From<&User> for ApplicantRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            email: user.email.clone(),
            skills: user.skills.clone(),
            experience: user.experience.clone(),
        }
    }
}

/// An application as seen inside a project view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationView {
    pub id: DbId,
    /// Absent only if the applicant row could not be resolved.
    pub student: Option<ApplicantRef>,
    pub message: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: Timestamp,
}

/// The full public project shape, with owner/student/applicants inlined.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub owner: Option<UserRef>,
    pub student: Option<UserRef>,
    pub skills: Vec<String>,
    pub difficulty: Difficulty,
    pub status: ProjectStatus,
    pub duration: String,
    pub budget: Option<f64>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub images: Vec<String>,
    pub applications: Vec<ApplicationView>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Per-user project statistics.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsView {
    pub owned: i64,
    pub mentored: i64,
    pub completed: i64,
    pub in_progress: i64,
}

impl From<ProfileCounts> for StatisticsView {
    fn from(counts: ProfileCounts) -> Self {
        Self {
            owned: counts.owned,
            mentored: counts.mentored,
            completed: counts.completed,
            in_progress: counts.in_progress,
        }
    }
}

/// A profile's recent-activity entry derived from a related project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView {
    pub id: DbId,
    /// `owned` when the user posted the project, `mentored` when they work
    /// on it as the assigned student.
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub updated_at: Timestamp,
    pub project: ActivityProjectRef,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProjectRef {
    pub id: DbId,
    pub title: String,
}

/// Build an [`ApplicationView`], resolving the applicant from the lookup map.
pub fn application_view(
    application: &Application,
    users: &HashMap<DbId, User>,
) -> ApplicationView {
    ApplicationView {
        id: application.id,
        student: users.get(&application.student_id).map(ApplicantRef::from),
        message: application.message.clone(),
        status: application.status,
        applied_at: application.applied_at,
    }
}

/// Build a [`ProjectView`] from a project row, its application rows, and a
/// lookup map of every referenced user.
pub fn project_view(
    project: &Project,
    applications: &[Application],
    users: &HashMap<DbId, User>,
) -> ProjectView {
    ProjectView {
        id: project.id,
        title: project.title.clone(),
        description: project.description.clone(),
        owner: users.get(&project.owner_id).map(UserRef::from),
        student: project
            .student_id
            .and_then(|id| users.get(&id))
            .map(UserRef::from),
        skills: project.skills.clone(),
        difficulty: project.difficulty,
        status: project.status,
        duration: project.duration.clone(),
        budget: project.budget,
        github_url: project.github_url.clone(),
        live_url: project.live_url.clone(),
        images: project.images.clone(),
        applications: applications
            .iter()
            .map(|a| application_view(a, users))
            .collect(),
        created_at: project.created_at,
        updated_at: project.updated_at,
    }
}

/// Build an [`ActivityView`] for a project relative to the profile user.
pub fn activity_view(project: &Project, user_id: DbId) -> ActivityView {
    let kind = if project.owner_id == user_id {
        "owned"
    } else if project.student_id == Some(user_id) {
        "mentored"
    } else {
        "project"
    };
    ActivityView {
        id: project.id,
        kind,
        title: project.title.clone(),
        description: truncate_chars(&project.description, ACTIVITY_DESCRIPTION_CHARS).to_string(),
        status: project.status,
        updated_at: project.updated_at,
        project: ActivityProjectRef {
            id: project.id,
            title: project.title.clone(),
        },
    }
}
