//! Application builder.

use iced::Theme;

use crate::config::Config;
use crate::state::State;
use crate::{update, views};

pub fn run(config: Config) -> iced::Result {
    iced::application("Aniview", update::update, views::view)
        .theme(theme)
        .window_size(iced::Size::new(1280.0, 800.0))
        .run_with(move || State::boot(&config))
}

fn theme(_state: &State) -> Theme {
    Theme::TokyoNight
}
