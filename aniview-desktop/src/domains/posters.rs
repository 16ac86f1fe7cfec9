//! Poster bytes → iced image handles.
//!
//! Deliberately simple pipeline: fetch once per id, cache the handle,
//! render a placeholder while bytes are pending or after a failed fetch.
//! A poster is never worth an error state, so failures are logged and
//! swallowed.

use std::collections::{HashMap, HashSet};

use iced::widget::image;
use iced::Task;

use aniview_model::Anime;

use crate::api_client::JikanClient;

#[derive(Debug, Clone)]
pub enum Message {
    Fetched { mal_id: u32, bytes: Option<Vec<u8>> },
}

#[derive(Debug, Default)]
pub struct PosterCache {
    handles: HashMap<u32, image::Handle>,
    pending: HashSet<u32>,
}

impl PosterCache {
    pub fn get(&self, mal_id: u32) -> Option<&image::Handle> {
        self.handles.get(&mal_id)
    }

    /// Schedule a fetch unless the poster is already cached or on its way.
    pub fn request(
        &mut self,
        mal_id: u32,
        url: Option<&str>,
        client: &JikanClient,
    ) -> Task<Message> {
        let Some(url) = url else {
            return Task::none();
        };
        if self.handles.contains_key(&mal_id) || self.pending.contains(&mal_id) {
            return Task::none();
        }
        self.pending.insert(mal_id);

        let url = url.to_string();
        let client = client.clone();
        Task::perform(
            async move {
                match client.get_bytes(&url).await {
                    Ok(bytes) => Some(bytes),
                    Err(error) => {
                        log::debug!("poster fetch failed for {url}: {error}");
                        None
                    }
                }
            },
            move |bytes| Message::Fetched { mal_id, bytes },
        )
    }

    /// Schedule fetches for a whole result page.
    pub fn request_for(
        &mut self,
        items: &[Anime],
        client: &JikanClient,
    ) -> Task<Message> {
        let tasks: Vec<_> = items
            .iter()
            .map(|anime| self.request(anime.mal_id, anime.image_url(), client))
            .collect();
        Task::batch(tasks)
    }

    pub fn apply(&mut self, message: Message) {
        let Message::Fetched { mal_id, bytes } = message;
        self.pending.remove(&mal_id);
        if let Some(bytes) = bytes {
            self.handles.insert(mal_id, image::Handle::from_bytes(bytes));
        }
    }
}
