//! Editorial homepage content: feature cards and testimonials.
//!
//! These rows are seeded by migration and carry nothing sensitive, so the
//! models serialize directly onto the wire.

use mentorlink_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A feature card row from the `features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub display_order: i32,
    pub is_active: bool,
}

/// A testimonial row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub quote: String,
    pub rating: i32,
    pub is_featured: bool,
    pub created_at: Timestamp,
}
