//! Client-side password digests for Postbox.
//!
//! Passwords never reach the server in plain text: clients send the
//! lowercase hex SHA-256 digest produced here, and the directory compares
//! digests as opaque strings.

use sha2::{Digest, Sha256};

/// Hash a password into the digest form the server expects.
///
/// # Examples
///
/// ```
/// use postbox::hash_password;
///
/// let digest = hash_password("secret123");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, hash_password("secret123"));
/// ```
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
