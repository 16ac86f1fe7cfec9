//! Search domain: the request/state coordinator and its support pieces.

pub mod debounce;
pub mod messages;
pub mod pagination;
pub mod types;
pub mod update;

use std::time::Duration;

use iced::task::Handle;

pub use self::debounce::Debouncer;
pub use self::messages::Message;
pub use self::types::{SearchFailure, SearchState, Status};

/// Search domain container: the pure coordinator state plus the abort
/// handles for whatever the domain currently has scheduled.
#[derive(Debug)]
pub struct SearchDomain {
    pub state: SearchState,
    pub debounce: Debouncer,
    /// Abort handle of the in-flight search call, if any.
    pub(crate) in_flight: Option<Handle>,
    /// Abort handle of the pending debounce timer, if any.
    pub(crate) pending_timer: Option<Handle>,
}

impl SearchDomain {
    pub fn new(debounce_window: Duration) -> Self {
        Self {
            state: SearchState::default(),
            debounce: Debouncer::new(debounce_window),
            in_flight: None,
            pending_timer: None,
        }
    }

    /// Cancel everything scheduled: the in-flight call and the pending
    /// debounce timer. Used when the results view is left and on explicit
    /// cancellation; never surfaces as an error.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        if let Some(handle) = self.pending_timer.take() {
            handle.abort();
        }
        self.debounce.invalidate();
        self.state.cancel();
    }
}
