use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::search_client::SearchCollaborator;
use crate::view::state::{ResponseOrdering, SearchTicket, ViewState};

/// Drives one page session: holds the current `ViewState` and runs searches against
/// the collaborator.
///
/// Searches are never cancelled. Two overlapping searches both complete and the
/// configured `ResponseOrdering` decides which one the view ends up showing.
pub struct SearchController {
    search: Arc<dyn SearchCollaborator>,
    ordering: ResponseOrdering,
    state: Mutex<ViewState>,
}

impl SearchController {
    /// Mounts a view on `query`. The returned ticket is the mount-time search; pass it
    /// to [`SearchController::run`].
    pub fn mount(
        search: Arc<dyn SearchCollaborator>,
        query: impl Into<String>,
        ordering: ResponseOrdering,
    ) -> (Self, SearchTicket) {
        let (state, ticket) = ViewState::mount(query);
        let controller = Self {
            search,
            ordering,
            state: Mutex::new(state),
        };
        (controller, ticket)
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Stores `query` and returns the ticket to run, if the value actually changed.
    pub async fn begin(&self, query: impl Into<String>) -> Option<SearchTicket> {
        let mut state = self.state.lock().await;
        let (next, ticket) = state.on_query_change(query);
        *state = next;
        ticket
    }

    /// Issues the search for `ticket` and applies its outcome. The state lock is not
    /// held while the collaborator call is in flight.
    pub async fn run(&self, ticket: SearchTicket) -> ViewState {
        debug!("Issuing search #{} for {:?}", ticket.seq, ticket.query);
        let outcome = self.search.search(&ticket.query).await;

        let mut state = self.state.lock().await;
        if state.is_stale(ticket.seq, self.ordering) {
            info!(
                "Discarding stale response for search #{} (latest is #{})",
                ticket.seq, state.latest_seq
            );
        }

        let next = match outcome {
            Ok(results) => {
                debug!("Search #{} returned {} postings", ticket.seq, results.len());
                state.on_search_succeeded(ticket.seq, results, self.ordering)
            }
            Err(e) => {
                warn!("Search #{} for {:?} failed: {e}", ticket.seq, ticket.query);
                state.on_search_failed(ticket.seq, e.to_string(), self.ordering)
            }
        };
        *state = next.clone();
        next
    }

    /// Query change as a single step: store the new value, then search if it changed.
    pub async fn on_query_change(&self, query: impl Into<String>) -> ViewState {
        match self.begin(query).await {
            Some(ticket) => self.run(ticket).await,
            None => self.snapshot().await,
        }
    }
}
