use aniview_model::AnimeDetail;

#[derive(Debug, Clone)]
pub enum Message {
    /// The fetch for `id` finished; failures arrive pre-rendered for the
    /// screen, the view never sees transport errors.
    Fetched {
        id: u32,
        result: Result<AnimeDetail, &'static str>,
    },
}
