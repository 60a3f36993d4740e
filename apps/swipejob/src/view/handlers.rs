//! Axum route handlers for the search page, the About page and the JSON search API.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::state::AppState;
use crate::view::about::AboutPage;
use crate::view::controller::SearchController;
use crate::view::render::SearchPage;
use crate::view::session::{session_cookie, session_id};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchPageParams {
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// A posting plus the skills its summary mentions.
#[derive(Debug, Serialize)]
pub struct MatchedJob {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub score_percent: String,
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub jobs: Vec<MatchedJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Without a known session cookie this mounts a new view on the requested (or default)
/// query, waits for the mount-time search and hands out a session cookie. With one, a
/// `query` parameter is dispatched as a query change on that session's controller, so
/// re-submitting the current query issues no search; no parameter just re-renders.
/// A failed search still renders the page, with the error shown.
pub async fn handle_search_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchPageParams>,
) -> Result<Response, AppError> {
    let existing = match session_id(&headers) {
        Some(id) => state.sessions.get(id).await,
        None => None,
    };

    let (controller, new_session) = match existing {
        Some(controller) => {
            if let Some(query) = params.query {
                controller.on_query_change(query).await;
            }
            (controller, None)
        }
        None => {
            let query = params
                .query
                .unwrap_or_else(|| state.config.default_query.clone());
            let (controller, ticket) = SearchController::mount(
                state.search.clone(),
                query,
                state.config.response_ordering,
            );
            let controller = Arc::new(controller);
            let id = state.sessions.insert(controller.clone()).await;
            info!("Mounted page session {id}");
            controller.run(ticket).await;
            (controller, Some(id))
        }
    };

    let view = controller.snapshot().await;
    let page = Html(SearchPage::new(&view, &state.skills).render()?);

    Ok(match new_session {
        Some(id) => ([(header::SET_COOKIE, session_cookie(id))], page).into_response(),
        None => page.into_response(),
    })
}

/// GET /about
pub async fn handle_about() -> Result<Html<String>, AppError> {
    Ok(Html(AboutPage::default().render()?))
}

/// POST /api/v1/search
///
/// Runs the search and returns each posting with its matched skills.
pub async fn handle_search_api(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    info!("Searching jobs with query: {:?}", request.query);
    let postings = state.search.search(&request.query).await?;
    info!("Found {} job matches", postings.len());

    let jobs = postings
        .into_iter()
        .map(|posting| {
            let matched_skills = state
                .skills
                .matches_in(&posting.job_summary)
                .into_iter()
                .map(str::to_string)
                .collect();
            MatchedJob {
                score_percent: posting.score_percent(),
                matched_skills,
                posting,
            }
        })
        .collect();

    Ok(Json(SearchResponse {
        query: request.query,
        jobs,
    }))
}
