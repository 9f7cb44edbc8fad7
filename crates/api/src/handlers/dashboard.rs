//! Handler for the public homepage dashboard.

use axum::extract::State;
use axum::Json;
use mentorlink_core::stats::success_rate;
use mentorlink_db::models::content::{Feature, Testimonial};
use mentorlink_db::repositories::{ContentRepo, ProjectRepo, StatsRepo, UserRepo};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::handlers::project::load_project_views;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::views::{ProjectView, PublicUser};

/// How many testimonials, top mentors, and recent projects the homepage shows.
const HIGHLIGHT_LIMIT: i64 = 6;

/// A single stat tile on the homepage.
#[derive(Debug, Serialize)]
pub struct StatTile {
    pub id: &'static str,
    pub label: &'static str,
    /// A count for most tiles; a formatted percentage for the success rate.
    pub value: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlights {
    pub top_mentors: Vec<PublicUser>,
    pub recent_projects: Vec<ProjectView>,
}

/// Payload for `GET /dashboard/home`.
#[derive(Debug, Serialize)]
pub struct HomeData {
    pub stats: Vec<StatTile>,
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
    pub highlights: Highlights,
}

/// GET /api/v1/dashboard/home
///
/// Homepage content and platform statistics in one response.
pub async fn home(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HomeData>>> {
    let counts = StatsRepo::platform_counts(&state.pool).await?;
    let features = ContentRepo::active_features(&state.pool).await?;
    let testimonials = ContentRepo::featured_testimonials(&state.pool, HIGHLIGHT_LIMIT).await?;
    let top_mentors = UserRepo::top_mentors(&state.pool, HIGHLIGHT_LIMIT).await?;
    let recent_projects = ProjectRepo::recent(&state.pool, HIGHLIGHT_LIMIT).await?;

    let rate = success_rate(counts.completed_projects, counts.total_projects);

    let stats = vec![
        StatTile {
            id: "activeProjects",
            label: "Active Projects",
            value: json!(counts.active_projects),
        },
        StatTile {
            id: "mentors",
            label: "Mentors",
            value: json!(counts.mentor_count),
        },
        StatTile {
            id: "students",
            label: "Students",
            value: json!(counts.student_count),
        },
        StatTile {
            id: "successRate",
            label: "Success Rate",
            value: json!(format!("{rate}%")),
        },
    ];

    let recent_views = load_project_views(&state.pool, &recent_projects).await?;

    Ok(Json(ApiResponse::data(HomeData {
        stats,
        features,
        testimonials,
        highlights: Highlights {
            top_mentors: top_mentors.iter().map(PublicUser::from).collect(),
            recent_projects: recent_views,
        },
    })))
}
