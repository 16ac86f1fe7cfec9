//! Detail domain: fetch-by-id for the detail screen.

pub mod messages;
pub mod types;
pub mod update;

use iced::task::Handle;

pub use self::messages::Message;
pub use self::types::{DetailState, DetailStatus};

#[derive(Debug, Default)]
pub struct DetailDomain {
    pub state: DetailState,
    pub(crate) in_flight: Option<Handle>,
}
