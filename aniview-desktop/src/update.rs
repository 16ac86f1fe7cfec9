//! Top-level message dispatcher.

use iced::Task;

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::{detail, search};
use crate::state::{Screen, State};

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    match message {
        DomainMessage::Search(message) => search::update::update(state, message),
        DomainMessage::Detail(message) => detail::update::update(state, message),
        DomainMessage::Poster(message) => {
            state.posters.apply(message);
            Task::none()
        }
        DomainMessage::Event(event) => handle_event(state, event),
    }
}

fn handle_event(
    state: &mut State,
    event: CrossDomainEvent,
) -> Task<DomainMessage> {
    match event {
        CrossDomainEvent::NavigateToDetail(id) => {
            // Leaving the results view cancels the outstanding search call
            // and the pending debounce timer; neither may land afterwards.
            state.search.cancel();
            state.screen = Screen::Detail;
            detail::update::open(state, id)
        }
        CrossDomainEvent::NavigateBack => {
            detail::update::close(state);
            state.screen = Screen::Search;
            Task::none()
        }
    }
}
