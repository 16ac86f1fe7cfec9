//! View layer: renders coordinator state, emits user intents.

pub mod components;
pub mod detail;
pub mod search;

use iced::Element;

use crate::common::messages::DomainMessage;
use crate::state::{Screen, State};

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    match state.screen {
        Screen::Search => search::view(state),
        Screen::Detail => detail::view(state),
    }
}
