//! Search domain messages.

use aniview_model::{Genre, SearchResponse, SortField, SortOrder};

use super::types::SearchFailure;

#[derive(Debug, Clone)]
pub enum Message {
    // User actions
    /// Raw edit of the search bar; starts or restarts the debounce timer.
    QueryInput(String),
    GenreSelected(Genre),
    GenreCleared,
    YearSelected(u16),
    YearCleared,
    SortFieldSelected(SortField),
    SortOrderSelected(SortOrder),
    PrevPage,
    NextPage,
    /// Explicit retry of the request that just failed.
    Retry,

    // Internal events
    /// A debounce timer elapsed; the token identifies which one.
    QuerySettled(u64),
    /// The network call tagged with `generation` finished.
    Fetched {
        generation: u64,
        result: Result<SearchResponse, SearchFailure>,
    },
}
