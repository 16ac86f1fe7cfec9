//! Aniview: a desktop search client for the Jikan anime catalog.
//!
//! The application follows an Elm-style architecture: a single [`state::State`]
//! is mutated exclusively by [`update::update`] in response to messages, and
//! all asynchronous work (HTTP calls, debounce timers) runs as abortable
//! tasks that report back through messages.

pub mod api_client;
pub mod app;
pub mod common;
pub mod config;
pub mod domains;
pub mod state;
pub mod update;
pub mod views;
