//! Top-level message type and cross-domain events.

use crate::domains::{detail, posters, search};

/// Every message the application processes, nested by owning domain.
#[derive(Debug, Clone)]
pub enum DomainMessage {
    Search(search::Message),
    Detail(detail::Message),
    Poster(posters::Message),
    Event(CrossDomainEvent),
}

/// Events that cross domain boundaries instead of belonging to one of them.
#[derive(Debug, Clone)]
pub enum CrossDomainEvent {
    /// Open the detail screen for a search result.
    NavigateToDetail(u32),
    /// Leave the detail screen and return to the results.
    NavigateBack,
}
