//! Repository for homepage content (`features`, `testimonials`).

use sqlx::PgPool;

use crate::models::content::{Feature, Testimonial};

/// Provides read access to seeded homepage content.
pub struct ContentRepo;

impl ContentRepo {
    /// Active feature cards in display order.
    pub async fn active_features(pool: &PgPool) -> Result<Vec<Feature>, sqlx::Error> {
        sqlx::query_as::<_, Feature>(
            "SELECT id, title, description, icon, display_order, is_active
             FROM features
             WHERE is_active = TRUE
             ORDER BY display_order ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// The newest featured testimonials, up to `limit`.
    pub async fn featured_testimonials(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        sqlx::query_as::<_, Testimonial>(
            "SELECT id, name, role, avatar, quote, rating, is_featured, created_at
             FROM testimonials
             WHERE is_featured = TRUE
             ORDER BY created_at DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
