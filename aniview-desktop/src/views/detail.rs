//! Detail screen for a single record.

use chrono::{DateTime, FixedOffset};
use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length};

use aniview_model::AnimeDetail;

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::detail::DetailStatus;
use crate::state::State;

use super::components::poster;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let back = button(text("Back").size(14))
        .on_press(DomainMessage::Event(CrossDomainEvent::NavigateBack))
        .style(button::secondary);

    let body: Element<'_, DomainMessage> = match state.detail.state.status {
        DetailStatus::Loading => text("Loading...").size(16).into(),
        DetailStatus::Error => {
            text(state.detail.state.error.unwrap_or("No details available"))
                .style(text::danger)
                .size(15)
                .into()
        }
        _ => match &state.detail.state.data {
            Some(detail) => record(state, detail),
            None => text("No details available").size(15).into(),
        },
    };

    container(column![back, body].spacing(16)).padding(24).into()
}

fn record<'a>(
    state: &'a State,
    detail: &'a AnimeDetail,
) -> Element<'a, DomainMessage> {
    let genres = if detail.genres.is_empty() {
        "N/A".to_string()
    } else {
        detail
            .genres
            .iter()
            .map(|genre| genre.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let aired = match (&detail.aired.from, &detail.aired.to) {
        (Some(from), Some(to)) => {
            format!("{} - {}", format_date(from), format_date(to))
        }
        (Some(from), None) => format!("{} - Present", format_date(from)),
        _ => "N/A".to_string(),
    };

    let record = column![
        container(poster(state.posters.get(detail.mal_id), 300.0))
            .width(Length::Fixed(220.0)),
        text(detail.title.as_str()).size(26),
        text(detail.synopsis.as_deref().unwrap_or("No synopsis available."))
            .size(15),
        labeled("Episodes", detail.episodes.map(|count| count.to_string())),
        labeled("Score", detail.score.map(|score| format!("{score:.2}"))),
        labeled("Type", detail.kind.clone()),
        text(format!("Genres: {genres}")).size(15),
        text(format!("Aired: {aired}")).size(15),
    ]
    .spacing(10);

    scrollable(record).height(Length::Fill).into()
}

fn labeled(
    label: &str,
    value: Option<String>,
) -> Element<'static, DomainMessage> {
    text(format!(
        "{label}: {}",
        value.unwrap_or_else(|| "N/A".to_string())
    ))
    .size(15)
    .into()
}

fn format_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%b %e, %Y").to_string()
}
