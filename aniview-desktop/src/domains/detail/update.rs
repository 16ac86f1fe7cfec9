//! Detail domain update logic.

use iced::Task;

use crate::api_client::ApiError;
use crate::common::messages::DomainMessage;
use crate::state::State;

use super::messages::Message;
use super::types::DetailStatus;

const GENERIC_ERROR: &str = "Failed to load details. Please try again.";
const RATE_LIMITED_ERROR: &str =
    "Too many requests! Please wait a moment and try again.";

pub fn update(state: &mut State, message: Message) -> Task<DomainMessage> {
    match message {
        Message::Fetched { id, result } => {
            if state.detail.state.id != Some(id) {
                // Navigated away, or on to another record, before this arrived.
                return Task::none();
            }
            state.detail.in_flight = None;
            match result {
                Ok(data) => {
                    let poster = state.posters.request(
                        data.mal_id,
                        data.images.jpg.image_url.as_deref(),
                        &state.client,
                    );
                    state.detail.state.status = DetailStatus::Loaded;
                    state.detail.state.data = Some(data);
                    state.detail.state.error = None;
                    poster.map(DomainMessage::Poster)
                }
                Err(message) => {
                    state.detail.state.status = DetailStatus::Error;
                    state.detail.state.error = Some(message);
                    Task::none()
                }
            }
        }
    }
}

/// Begin loading `id`, aborting whatever fetch the screen had outstanding.
pub fn open(state: &mut State, id: u32) -> Task<DomainMessage> {
    if let Some(handle) = state.detail.in_flight.take() {
        handle.abort();
    }
    state.detail.state.clear();
    state.detail.state.id = Some(id);
    state.detail.state.status = DetailStatus::Loading;

    let client = state.client.clone();
    let (task, handle) = Task::perform(
        async move {
            client.detail(id).await.map_err(|error| match error {
                ApiError::RateLimited => RATE_LIMITED_ERROR,
                _ => GENERIC_ERROR,
            })
        },
        move |result| DomainMessage::Detail(Message::Fetched { id, result }),
    )
    .abortable();
    state.detail.in_flight = Some(handle);
    task
}

/// Abort any outstanding fetch and reset the screen; a response that loses
/// the race with the abort is dropped by the id check in [`update`].
pub fn close(state: &mut State) {
    if let Some(handle) = state.detail.in_flight.take() {
        handle.abort();
    }
    state.detail.state.clear();
}
