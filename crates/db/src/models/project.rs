//! Project entity model and DTOs.

use mentorlink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "project_difficulty", rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "project_status", rename_all = "kebab-case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub owner_id: DbId,
    pub student_id: Option<DbId>,
    pub skills: Vec<String>,
    pub difficulty: Difficulty,
    pub status: ProjectStatus,
    pub duration: String,
    pub budget: Option<f64>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new project. Status always starts `open`.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub owner_id: DbId,
    pub skills: Vec<String>,
    pub difficulty: Difficulty,
    pub duration: String,
    pub budget: Option<f64>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub images: Vec<String>,
}

/// DTO for the owner-mutable project fields. All fields optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub difficulty: Option<Difficulty>,
    pub status: Option<ProjectStatus>,
    pub duration: Option<String>,
    pub budget: Option<f64>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Optional filters for the public project listing.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub difficulty: Option<Difficulty>,
    pub skills: Option<Vec<String>>,
}

/// Which relationship to a user a profile project listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRelation {
    Owned,
    Mentored,
    All,
}
