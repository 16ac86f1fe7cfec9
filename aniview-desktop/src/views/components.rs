//! Widgets shared between screens.

use iced::widget::{button, column, container, image, text};
use iced::{ContentFit, Element, Length};

use aniview_model::Anime;

use crate::common::messages::{CrossDomainEvent, DomainMessage};

pub const CARD_POSTER_HEIGHT: f32 = 250.0;

/// Poster image, or a placeholder while bytes are pending or unavailable.
pub fn poster<'a>(
    handle: Option<&image::Handle>,
    height: f32,
) -> Element<'a, DomainMessage> {
    match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("No image").style(text::secondary))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(height))
            .style(container::rounded_box)
            .into(),
    }
}

pub fn anime_card<'a>(
    anime: &'a Anime,
    poster_handle: Option<&image::Handle>,
) -> Element<'a, DomainMessage> {
    container(
        column![
            poster(poster_handle, CARD_POSTER_HEIGHT),
            text(anime.title.as_str()).size(18),
            text(synopsis_preview(anime.synopsis.as_deref()))
                .size(13)
                .style(text::secondary),
            button(text("Details").size(14))
                .on_press(DomainMessage::Event(
                    CrossDomainEvent::NavigateToDetail(anime.mal_id)
                ))
                .style(button::secondary),
        ]
        .spacing(8),
    )
    .padding(10)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

fn synopsis_preview(synopsis: Option<&str>) -> String {
    match synopsis {
        Some(text) if text.chars().count() > 120 => {
            let cut: String = text.chars().take(120).collect();
            format!("{cut}...")
        }
        Some(text) => text.to_string(),
        None => "No description available.".to_string(),
    }
}
