//! Postbox - a minimal account and mailbox service.
//!
//! Clients create accounts, log in with a password digest, exchange short
//! text messages and manage their own read/unread message history. All
//! state lives in memory for the lifetime of the server process.

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod service;
pub mod web;

pub use auth::hash_password;
pub use config::Config;
pub use directory::{Deletion, Directory, Message};
pub use error::{ErrorCode, PostboxError, Result};
pub use service::ChatService;
pub use web::WebServer;
