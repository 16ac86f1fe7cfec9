//! Search screen: bar, filters, result grid, pagination.

use chrono::Datelike;
use iced::widget::{
    button, column, container, pick_list, row, scrollable, text, text_input,
};
use iced::{Alignment, Element, Length};

use aniview_model::{Genre, SortField, SortOrder};

use crate::common::messages::DomainMessage;
use crate::domains::search::pagination::{self, PageControls};
use crate::domains::search::{Message, SearchState, Status};
use crate::state::State;

use super::components::anime_card;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let search = &state.search.state;

    let search_bar = text_input("Search anime...", &search.input)
        .on_input(|value| DomainMessage::Search(Message::QueryInput(value)))
        .padding(10)
        .size(16);

    let mut content = column![search_bar, filter_row(search)]
        .spacing(16)
        .padding(24);

    if search.status == Status::Loading {
        content = content.push(text("Loading...").size(16));
    }
    if let Some(message) = search.error_message() {
        content = content.push(error_banner(message));
    }
    if search.status != Status::Loading
        && search.failure.is_none()
        && search.results.is_empty()
    {
        content = content.push(text(empty_prompt(search)).size(15));
    }
    if !search.results.is_empty() {
        content = content.push(results_grid(state));
        if search.status == Status::Success {
            content =
                content.push(pagination_row(pagination::page_controls(search)));
        }
    }

    content.into()
}

fn filter_row(search: &SearchState) -> Element<'_, DomainMessage> {
    let criteria = &search.criteria;

    let genre = pick_list(Genre::all(), criteria.genre, |genre| {
        DomainMessage::Search(Message::GenreSelected(genre))
    })
    .placeholder("Filter by Genre")
    .width(Length::Fixed(180.0));

    let year = pick_list(year_options(), criteria.year, |year| {
        DomainMessage::Search(Message::YearSelected(year))
    })
    .placeholder("Filter by Year")
    .width(Length::Fixed(140.0));

    let sort_field =
        pick_list(SortField::all(), Some(criteria.sort_field), |field| {
            DomainMessage::Search(Message::SortFieldSelected(field))
        })
        .width(Length::Fixed(150.0));

    let sort_order =
        pick_list(SortOrder::all(), Some(criteria.sort_order), |order| {
            DomainMessage::Search(Message::SortOrderSelected(order))
        })
        .width(Length::Fixed(140.0));

    row![
        genre,
        clear_button(
            criteria
                .genre
                .map(|_| DomainMessage::Search(Message::GenreCleared))
        ),
        year,
        clear_button(
            criteria
                .year
                .map(|_| DomainMessage::Search(Message::YearCleared))
        ),
        sort_field,
        sort_order,
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

/// Small "clear this filter" affordance, enabled only while the filter is
/// set.
fn clear_button(on_press: Option<DomainMessage>) -> Element<'static, DomainMessage> {
    button(text("x").size(12))
        .on_press_maybe(on_press)
        .style(button::text)
        .into()
}

fn year_options() -> Vec<u16> {
    let current = chrono::Utc::now().year() as u16;
    (0..30).map(|offset| current - offset).collect()
}

fn empty_prompt(search: &SearchState) -> String {
    if search.criteria.text.is_empty() {
        "Showing top anime. Use the search bar or filters to refine."
            .to_string()
    } else {
        format!(
            "No results found for \"{}\". Try a different search.",
            search.criteria.text
        )
    }
}

fn error_banner(message: &str) -> Element<'_, DomainMessage> {
    container(
        column![
            text(message).style(text::danger).size(15),
            button(text("Retry").size(14))
                .on_press(DomainMessage::Search(Message::Retry))
                .style(button::primary),
        ]
        .spacing(8),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

fn results_grid(state: &State) -> Element<'_, DomainMessage> {
    let mut grid = column![].spacing(16);
    for chunk in state.search.state.results.chunks(3) {
        let mut cards = row![].spacing(16);
        for anime in chunk {
            cards = cards.push(anime_card(anime, state.posters.get(anime.mal_id)));
        }
        grid = grid.push(cards.width(Length::Fill));
    }
    scrollable(grid).height(Length::Fill).into()
}

fn pagination_row(controls: PageControls) -> Element<'static, DomainMessage> {
    row![
        button(text("Prev")).on_press_maybe(
            controls
                .can_go_prev
                .then(|| DomainMessage::Search(Message::PrevPage))
        ),
        text(format!("Page {}", controls.page)).size(15),
        button(text("Next")).on_press_maybe(
            controls
                .can_go_next
                .then(|| DomainMessage::Search(Message::NextPage))
        ),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
