//! Page sessions: one `SearchController` per browser, keyed by a session cookie.
//!
//! Sessions live in memory only. The store is bounded; once full, the oldest session
//! is dropped and that browser simply gets a freshly mounted view on its next visit.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::view::controller::SearchController;

pub const SESSION_COOKIE: &str = "swipejob_session";
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<Sessions>>,
    max_sessions: usize,
}

#[derive(Default)]
struct Sessions {
    by_id: HashMap<Uuid, Arc<SearchController>>,
    order: VecDeque<Uuid>,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Sessions::default())),
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<SearchController>> {
        self.inner.lock().await.by_id.get(&id).cloned()
    }

    /// Registers a controller under a new session id, evicting the oldest session if full.
    pub async fn insert(&self, controller: Arc<SearchController>) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.inner.lock().await;

        while sessions.by_id.len() >= self.max_sessions {
            let Some(oldest) = sessions.order.pop_front() else {
                break;
            };
            sessions.by_id.remove(&oldest);
            debug!("Evicted page session {oldest}");
        }

        sessions.by_id.insert(id, controller);
        sessions.order.push_back(id);
        id
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.by_id.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS)
    }
}

/// Reads the session id from the request's `Cookie` headers, if present and well-formed.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}

/// `Set-Cookie` value for a new session.
pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
