//! Core data model definitions shared across Aniview crates.

pub mod anime;
pub mod query;

pub use anime::{
    AiredRange, Anime, AnimeDetail, DetailResponse, GenreEntry, ImageSet,
    Images, Pagination, SearchResponse,
};
pub use query::{
    Genre, SearchCriteria, SearchRequest, SortField, SortOrder, PAGE_SIZE,
};
