//! Authentication helpers for Postbox.

mod password;

pub use password::hash_password;
