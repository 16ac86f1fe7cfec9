//! Serde projections of the Jikan v4 payloads.
//!
//! These are read-only views of what the API returns: each successful
//! search response replaces the previous result list wholesale, so none of
//! these types has a lifecycle of its own.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// One record of a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct Anime {
    pub mal_id: u32,
    pub title: String,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub synopsis: Option<String>,
}

impl Anime {
    /// Poster URL for card rendering, if the record carries one.
    pub fn image_url(&self) -> Option<&str> {
        self.images.jpg.image_url.as_deref()
    }
}

/// Image URL set, keyed by format.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub jpg: ImageSet,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

/// Server-reported pagination metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub last_visible_page: Option<u32>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// Envelope of `GET /anime`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<Anime>,
    // An absent pagination object means there is nothing past this page.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Envelope of `GET /anime/{id}/full`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub data: AnimeDetail,
}

/// Extended record backing the detail screen.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimeDetail {
    pub mal_id: u32,
    pub title: String,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreEntry>,
    #[serde(default)]
    pub aired: AiredRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreEntry {
    pub mal_id: u32,
    pub name: String,
}

/// Air-date range; `to == None` means the show is still running.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiredRange {
    #[serde(default)]
    pub from: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub to: Option<DateTime<FixedOffset>>,
}
