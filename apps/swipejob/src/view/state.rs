//! Search view state and its transitions.
//!
//! `ViewState` is an immutable record; every transition returns a new one. The
//! controller dispatches transitions on external triggers (query change, search
//! response) and owns the current record.

use crate::models::posting::JobPosting;

/// What to do with a response that belongs to an older search than the latest one issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Whichever response resolves last is shown, even if it is for an older query.
    #[default]
    LastWriteWins,
    /// Responses for anything but the latest issued search are dropped.
    DiscardStale,
}

/// One issued search: the query and its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub results: Vec<JobPosting>,
    pub error: Option<String>,
    /// Sequence number of the most recently issued search.
    pub latest_seq: u64,
    /// Sequence number of the response currently reflected in `results`/`error`.
    /// Zero until the first response lands.
    pub applied_seq: u64,
}

impl ViewState {
    /// Initial state for a freshly mounted view. Mounting always issues a search.
    pub fn mount(query: impl Into<String>) -> (Self, SearchTicket) {
        let query = query.into();
        let state = ViewState {
            query: query.clone(),
            latest_seq: 1,
            ..ViewState::default()
        };
        (state, SearchTicket { seq: 1, query })
    }

    /// Stores a new query value. A search is only issued if the value changed.
    ///
    /// Results and any displayed error are left untouched until a response arrives.
    pub fn on_query_change(&self, query: impl Into<String>) -> (Self, Option<SearchTicket>) {
        let query = query.into();
        if query == self.query {
            return (self.clone(), None);
        }

        let seq = self.latest_seq + 1;
        let state = ViewState {
            query: query.clone(),
            latest_seq: seq,
            ..self.clone()
        };
        (state, Some(SearchTicket { seq, query }))
    }

    /// Replaces the result list wholesale and clears any error.
    pub fn on_search_succeeded(
        &self,
        seq: u64,
        results: Vec<JobPosting>,
        ordering: ResponseOrdering,
    ) -> Self {
        if self.is_stale(seq, ordering) {
            return self.clone();
        }

        ViewState {
            results,
            error: None,
            applied_seq: seq,
            ..self.clone()
        }
    }

    /// Records the failure message. Previously shown results stay in place.
    pub fn on_search_failed(
        &self,
        seq: u64,
        message: impl Into<String>,
        ordering: ResponseOrdering,
    ) -> Self {
        if self.is_stale(seq, ordering) {
            return self.clone();
        }

        ViewState {
            error: Some(message.into()),
            applied_seq: seq,
            ..self.clone()
        }
    }

    pub fn is_stale(&self, seq: u64, ordering: ResponseOrdering) -> bool {
        ordering == ResponseOrdering::DiscardStale && seq < self.latest_seq
    }
}
