//! Coordinator state and its transitions.
//!
//! All mutation of search state happens through the methods here, which are
//! pure with respect to the runtime: issuing the actual network call and
//! aborting superseded ones is the update glue's job. Every issued request
//! gets a generation number; a response may only be applied while its
//! generation is still the latest, so the winner is always the last request
//! *issued*, not the last response to arrive.

use aniview_model::{Anime, SearchCriteria, SearchRequest, SearchResponse};

use crate::api_client::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// User-facing failure classification. Rate limiting gets its own message
/// because waiting is the fix; everything else shares the generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    RateLimited,
    Transport,
}

impl SearchFailure {
    pub fn message(&self) -> &'static str {
        match self {
            SearchFailure::RateLimited => {
                "Too many requests! Please wait a moment before searching again."
            }
            SearchFailure::Transport => {
                "Failed to fetch results. Please try again."
            }
        }
    }
}

impl From<&ApiError> for SearchFailure {
    fn from(error: &ApiError) -> Self {
        match error {
            ApiError::RateLimited => SearchFailure::RateLimited,
            _ => SearchFailure::Transport,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchState {
    /// Draft text bound to the search bar; becomes criteria text once the
    /// debounce window elapses.
    pub input: String,
    pub criteria: SearchCriteria,
    pub page: u32,
    pub results: Vec<Anime>,
    pub has_next_page: bool,
    pub status: Status,
    pub failure: Option<SearchFailure>,
    generation: u64,
    /// Terminal state to restore if the in-flight call is cancelled.
    prev_status: Status,
    prev_failure: Option<SearchFailure>,
    /// Request currently on the wire, if any.
    in_flight: Option<SearchRequest>,
    /// Request whose response the current `results` came from.
    applied: Option<SearchRequest>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            input: String::new(),
            criteria: SearchCriteria::default(),
            page: 1,
            results: Vec::new(),
            has_next_page: false,
            status: Status::Idle,
            failure: None,
            generation: 0,
            prev_status: Status::Idle,
            prev_failure: None,
            in_flight: None,
            applied: None,
        }
    }
}

impl SearchState {
    /// The request the current criteria and page describe.
    pub fn request(&self) -> SearchRequest {
        SearchRequest::new(self.criteria.clone(), self.page)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.failure.map(|failure| failure.message())
    }

    /// Issue the request for the current criteria and page.
    ///
    /// Returns the generation to tag the network call with, or `None` when
    /// the identical request is already in flight or was the most recently
    /// applied one (duplicate triggers must not produce a second call).
    /// After a failure the same request may be issued again: that is the
    /// explicit retry path.
    pub fn submit(&mut self) -> Option<u64> {
        let request = self.request();
        if self.in_flight.as_ref() == Some(&request) {
            return None;
        }
        if self.in_flight.is_none()
            && self.status == Status::Success
            && self.applied.as_ref() == Some(&request)
        {
            return None;
        }

        self.generation += 1;
        if self.status != Status::Loading {
            self.prev_status = self.status;
            self.prev_failure = self.failure;
        }
        self.status = Status::Loading;
        self.failure = None;
        self.in_flight = Some(request);
        Some(self.generation)
    }

    /// Replace the criteria. Any change invalidates the current page, so
    /// the page resets to 1 before the request is issued.
    pub fn set_criteria(&mut self, criteria: SearchCriteria) -> Option<u64> {
        if criteria == self.criteria {
            return None;
        }
        self.criteria = criteria;
        self.page = 1;
        self.submit()
    }

    /// Navigate to a page. Page 0 and forward navigation past the last
    /// server-reported page are rejected.
    pub fn set_page(&mut self, page: u32) -> Option<u64> {
        if page < 1 {
            return None;
        }
        if page > self.page && !self.has_next_page {
            return None;
        }
        self.page = page;
        self.submit()
    }

    /// Apply a successful response. Returns false, leaving the state
    /// untouched, when the response belongs to a superseded generation.
    pub fn apply_results(
        &mut self,
        generation: u64,
        response: SearchResponse,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.applied = self.in_flight.take();
        self.results = response.data;
        self.has_next_page = response.pagination.has_next_page;
        self.status = Status::Success;
        self.failure = None;
        true
    }

    /// Apply a failure. Stale generations are dropped the same way as in
    /// [`apply_results`](Self::apply_results). Results from the last
    /// successful response stay visible under the error banner.
    pub fn apply_failure(
        &mut self,
        generation: u64,
        failure: SearchFailure,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.in_flight = None;
        self.status = Status::Error;
        self.failure = Some(failure);
        true
    }

    /// Forget the in-flight request and restore the status that preceded
    /// it. Bumps the generation so a transport that ignored the abort can
    /// never apply the stale response; cancellation is not an error.
    pub fn cancel(&mut self) {
        if self.in_flight.take().is_some() {
            self.generation += 1;
            self.status = self.prev_status;
            self.failure = self.prev_failure;
        }
    }
}
