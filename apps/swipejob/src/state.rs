use std::sync::Arc;

use crate::config::Config;
use crate::search_client::SearchCollaborator;
use crate::skills::SkillSet;
use crate::view::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Search backend. Default: `HttpSearchClient`; `SampleSearch` when local testing is on.
    pub search: Arc<dyn SearchCollaborator>,
    /// Skill catalog used for highlighting. Read-only for the life of the process.
    pub skills: SkillSet,
    /// Live page sessions, one search controller each.
    pub sessions: SessionStore,
}
