//! Shared response envelope types for API handlers.
//!
//! Every success response uses the `{ "success": true, "data": ... }`
//! envelope; failures are produced by the [`crate::error::AppError`]
//! `IntoResponse` impl with the same shape plus `message`/`errors`. Use
//! these types instead of ad-hoc `serde_json::json!` so the wire shape
//! cannot drift between endpoints.

use mentorlink_core::pagination::total_pages;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A plain data response.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// A data response with a human-readable message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

/// A paginated list payload.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub data: Vec<T>,
    /// Number of items on this page.
    pub count: usize,
    /// Total number of matching items across all pages.
    pub total: i64,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    /// `ceil(total / limit)`.
    pub pages: i64,
}

impl<T: Serialize> Page<T> {
    pub fn new(data: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            total,
            pagination: Pagination {
                page,
                limit,
                pages: total_pages(total, limit),
            },
        }
    }
}
