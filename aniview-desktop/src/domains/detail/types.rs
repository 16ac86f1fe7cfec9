use aniview_model::AnimeDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

#[derive(Debug, Default)]
pub struct DetailState {
    /// Id the screen is currently showing or loading; a late response for
    /// any other id is dropped.
    pub id: Option<u32>,
    pub status: DetailStatus,
    pub data: Option<AnimeDetail>,
    pub error: Option<&'static str>,
}

impl DetailState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
