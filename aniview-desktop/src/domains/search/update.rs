//! Search domain update logic: maps messages onto the pure coordinator
//! transitions and schedules the resulting work as abortable tasks.

use iced::Task;

use aniview_model::SearchCriteria;

use crate::common::messages::DomainMessage;
use crate::state::State;

use super::messages::Message;
use super::types::SearchFailure;

pub fn update(state: &mut State, message: Message) -> Task<DomainMessage> {
    match message {
        Message::QueryInput(input) => {
            let search = &mut state.search;
            search.state.input = input;

            // Each keystroke cancels the pending timer and starts a new one.
            if let Some(handle) = search.pending_timer.take() {
                handle.abort();
            }
            let token = search.debounce.restart();
            let window = search.debounce.window();
            let (task, handle) = Task::perform(
                async move {
                    tokio::time::sleep(window).await;
                    token
                },
                |token| DomainMessage::Search(Message::QuerySettled(token)),
            )
            .abortable();
            search.pending_timer = Some(handle);
            task
        }

        Message::QuerySettled(token) => {
            if !state.search.debounce.is_current(token) {
                // The user kept typing; a newer timer owns the commit.
                return Task::none();
            }
            state.search.pending_timer = None;
            let mut criteria = state.search.state.criteria.clone();
            criteria.text = state.search.state.input.clone();
            apply_criteria(state, criteria)
        }

        Message::GenreSelected(genre) => {
            let mut criteria = state.search.state.criteria.clone();
            criteria.genre = Some(genre);
            apply_criteria(state, criteria)
        }

        Message::GenreCleared => {
            let mut criteria = state.search.state.criteria.clone();
            criteria.genre = None;
            apply_criteria(state, criteria)
        }

        Message::YearSelected(year) => {
            let mut criteria = state.search.state.criteria.clone();
            criteria.year = Some(year);
            apply_criteria(state, criteria)
        }

        Message::YearCleared => {
            let mut criteria = state.search.state.criteria.clone();
            criteria.year = None;
            apply_criteria(state, criteria)
        }

        Message::SortFieldSelected(field) => {
            let mut criteria = state.search.state.criteria.clone();
            criteria.sort_field = field;
            apply_criteria(state, criteria)
        }

        Message::SortOrderSelected(order) => {
            let mut criteria = state.search.state.criteria.clone();
            criteria.sort_order = order;
            apply_criteria(state, criteria)
        }

        Message::PrevPage => {
            let target = state.search.state.page.saturating_sub(1);
            let generation = state.search.state.set_page(target);
            dispatch(state, generation)
        }

        Message::NextPage => {
            let target = state.search.state.page + 1;
            let generation = state.search.state.set_page(target);
            dispatch(state, generation)
        }

        Message::Retry => {
            // Permitted by the coordinator because duplicate suppression
            // does not apply in the error state.
            let generation = state.search.state.submit();
            dispatch(state, generation)
        }

        Message::Fetched { generation, result } => match result {
            Ok(response) => {
                if state.search.state.apply_results(generation, response) {
                    state.search.in_flight = None;
                    let client = state.client.clone();
                    state
                        .posters
                        .request_for(&state.search.state.results, &client)
                        .map(DomainMessage::Poster)
                } else {
                    log::debug!(
                        "discarding response from superseded generation {generation}"
                    );
                    Task::none()
                }
            }
            Err(failure) => {
                if state.search.state.apply_failure(generation, failure) {
                    state.search.in_flight = None;
                    log::info!("search failed: {}", failure.message());
                } else {
                    log::debug!(
                        "discarding failure from superseded generation {generation}"
                    );
                }
                Task::none()
            }
        },
    }
}

fn apply_criteria(
    state: &mut State,
    criteria: SearchCriteria,
) -> Task<DomainMessage> {
    let generation = state.search.state.set_criteria(criteria);
    dispatch(state, generation)
}

/// Spawn the network call for a freshly issued generation, aborting
/// whichever call it superseded.
pub(crate) fn dispatch(
    state: &mut State,
    generation: Option<u64>,
) -> Task<DomainMessage> {
    let Some(generation) = generation else {
        return Task::none();
    };

    let client = state.client.clone();
    let search = &mut state.search;
    if let Some(handle) = search.in_flight.take() {
        handle.abort();
    }

    let request = search.state.request();
    log::debug!(
        "issuing search (generation {generation}, page {})",
        request.page
    );
    let (task, handle) = Task::perform(
        async move {
            client
                .search(&request)
                .await
                .map_err(|error| SearchFailure::from(&error))
        },
        move |result| DomainMessage::Search(Message::Fetched { generation, result }),
    )
    .abortable();
    search.in_flight = Some(handle);
    task
}
