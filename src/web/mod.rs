//! HTTP binding for Postbox.
//!
//! This module exposes the service operations as a JSON API so that
//! clients can reach the directory over the network.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiReply;
pub use extract::RequestJson;
pub use router::create_router;
pub use server::WebServer;
