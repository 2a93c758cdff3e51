//! API handlers for the Postbox HTTP binding.

pub mod account;
pub mod message;

pub use account::*;
pub use message::*;

use crate::service::ChatService;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Request handler over the server's directory.
    pub service: ChatService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(service: ChatService) -> Self {
        Self { service }
    }
}
