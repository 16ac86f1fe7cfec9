//! Root application state.
//!
//! One explicitly owned object; the view layer reads it and emits intents,
//! while all mutation goes through [`crate::update::update`].

use std::time::Duration;

use iced::Task;

use crate::api_client::JikanClient;
use crate::common::messages::DomainMessage;
use crate::config::Config;
use crate::domains::detail::DetailDomain;
use crate::domains::posters::PosterCache;
use crate::domains::search::{self, SearchDomain};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Search,
    Detail,
}

#[derive(Debug)]
pub struct State {
    pub screen: Screen,
    pub search: SearchDomain,
    pub detail: DetailDomain,
    pub posters: PosterCache,
    pub client: JikanClient,
}

impl State {
    /// Construct the initial state and issue the default request so the
    /// first paint shows the top-ranked listing.
    pub fn boot(config: &Config) -> (Self, Task<DomainMessage>) {
        let mut state = Self {
            screen: Screen::Search,
            search: SearchDomain::new(Duration::from_millis(config.debounce_ms)),
            detail: DetailDomain::default(),
            posters: PosterCache::default(),
            client: JikanClient::new(config.api_base_url.clone()),
        };
        let generation = state.search.state.submit();
        let task = search::update::dispatch(&mut state, generation);
        (state, task)
    }
}
