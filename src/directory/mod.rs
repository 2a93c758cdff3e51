//! Account directory for Postbox.
//!
//! This module provides the server-side store:
//! - Account registration, login and removal
//! - Per-account mailboxes with read/unread tracking
//! - Positional message deletion

mod store;
mod types;

pub use store::Directory;
pub use types::{Account, Deletion, Mailbox, Message, DELETE_ALL, TIMESTAMP_FORMAT};
