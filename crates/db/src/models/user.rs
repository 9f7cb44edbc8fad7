//! User entity model and DTOs.

use mentorlink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account role. Immutable after registration: no update path carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Engineer,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Engineer => "engineer",
            Role::Student => "student",
        }
    }
}

/// A user row from the `users` table.
///
/// Deliberately not `Serialize`: the only way onto the wire is through the
/// fixed view shapes in the api crate, which cannot reach `password_hash`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
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

/// DTO for inserting a new user. The password arrives here already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub skills: Vec<String>,
    pub experience: String,
    pub avatar: String,
}

/// DTO for the owner-mutable profile fields. All fields optional.
///
/// Role, email, rating, and review counters are intentionally absent.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub is_available: Option<bool>,
}

/// Optional filters for the user directory listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub skills: Option<Vec<String>>,
}

/// Optional filters for the mentor/student directory listings.
#[derive(Debug, Clone, Default)]
pub struct DirectoryFilter {
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
}
